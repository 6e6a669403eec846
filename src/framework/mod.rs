//! Generic actor framework for record management.
//!
//! This module provides the building blocks that put a
//! [`Repository`](crate::repository::Repository) behind an async, message-passing
//! interface.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that stored types implement
//! - [`ResourceActor`] - Generic actor that owns a repository inside one Tokio task
//! - [`ResourceClient`] - Cloneable, type-safe handle for sending requests to the actor
//! - [`ActorClient`] - Trait giving resource-specific clients `list`/`get`/`delete` for free
//! - [`FrameworkError`] - Errors from the channel plumbing
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use record::Record;
