//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## Configuration
//!
//! Verbosity follows the `RUST_LOG` environment variable. The output is compact and
//! omits module paths (`with_target(false)`); events carry an `entity_type` field
//! instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per mutation
//! RUST_LOG=debug cargo run    # adds reads and full payloads
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown`, each with the collection size
//! - **Mutations** (`info`): `Created`, `Updated`, `Deleted`, with `id` and `size`
//! - **Misses** (`warn`): `Not found` for update and delete on an unknown id
//! - **Reads and payloads** (`debug`): `List`, `Get` with a `found` flag, and the
//!   draft of every `Create`/`Update`
//! - **Client spans**: each `ProductClient` call opens a span named after the method
//!
//! ## Workflow Trace Example
//!
//! ```text
//! INFO System started channel_buffer=32 seeded=false
//! INFO Actor started entity_type="Product" size=0
//! INFO create_product: Created entity_type="Product" id=9b1d... size=1
//! INFO update_product: Updated entity_type="Product" id=9b1d...
//! WARN delete: Not found entity_type="Product" id=missing
//! INFO Shutdown entity_type="Product" size=1
//! ```

/// Initializes the process-wide subscriber.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
