//! Error types for the Product actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
///
/// There is no not-found variant: a missing product comes back as `Ok(None)` and
/// the request-routing layer decides what that means to its caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        ProductError::ActorCommunicationError(e.to_string())
    }
}
