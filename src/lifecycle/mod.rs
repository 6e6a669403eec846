//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the running system.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Build the product repository (optionally seeded) and its actor
//! 2. **Configuration** - Apply a validated [`AppConfig`](crate::config::AppConfig)
//! 3. **Graceful Shutdown** - Close the actor's channel and wait for it to finish
//! 4. **Observability Setup** - Initialize tracing via [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Actor logs final state** - `Shutdown` with the remaining collection size
//! 4. **Await completion** - The join handle resolves
//!
//! Nothing is persisted: the collection is gone once the actor exits.

pub mod analytics_system;
pub mod tracing;

pub use self::analytics_system::*;
pub use self::tracing::*;
