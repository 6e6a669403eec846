//! # Subscription Analytics
//!
//! > **An in-memory product store with monthly subscription metrics.**
//!
//! Each product carries a month-by-month series of new subscriptions and
//! cancellations. The crate stores products, answers CRUD requests, synthesizes
//! believable series for "quick" products, and reduces a series to the three
//! numbers a dashboard shows.
//!
//! ## 🏗️ Design Philosophy
//!
//! The pieces with real logic are plain, synchronous and independently testable:
//!
//! - [`repository::Repository`] owns the collection. It is the only thing that mutates it.
//! - [`identity::IdGenerator`] hands out ids; it never consults the store.
//! - [`series::SeriesGenerator`] builds synthetic series; it never touches the store.
//! - [`aggregate::SubscriptionTotals`] sums a series; it is a pure function.
//!
//! They only meet in the caller. Around them, the [`framework`] puts the repository
//! inside a Tokio actor so async request handlers can share it without locks.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Absence, not errors
//! A missing or empty id is answered with `None` by the repository and with `Ok(None)`
//! by the clients. `Err` is reserved for plumbing failures (the actor is gone) and for
//! bad configuration.
//!
//! ### 2. Total-replace updates
//! Create and update both take a full [`ProductDraft`](model::ProductDraft). Update swaps
//! the whole record in place and keeps only the id.
//!
//! ### 3. Concurrency Model
//! The repository is single-threaded. The [`ResourceActor`](framework::ResourceActor)
//! owns it exclusively and applies requests in arrival order.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - **Core**: [`model`], [`identity`], [`repository`], [`series`], [`aggregate`]
//! - **Engine**: [`framework`] (generic actor, client, mocks)
//! - **Interface**: [`clients`], [`product_actor`]
//! - **Orchestration**: [`lifecycle`], [`config`], [`fixtures`]
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Point it at a config file
//! ANALYTICS_CONFIG=analytics.toml RUST_LOG=debug cargo run
//! ```

pub mod aggregate;
pub mod clients;
pub mod config;
pub mod fixtures;
pub mod framework;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod repository;
pub mod series;
