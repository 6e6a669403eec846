//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. A missing record is not one of
//! them: lookups answer `Ok(None)` and leave the not-found decision to the caller.

/// Errors that can occur while talking to a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
