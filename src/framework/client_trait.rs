//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `list`, `get` and
//! `delete` methods built on top of a generic `ResourceClient`.
use crate::framework::{FrameworkError, Record, ResourceClient};
use crate::model::RecordId;
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete operations.
///
/// Implementors supply the inner client and an error mapping; `list`, `get` and
/// `delete` come for free. Create and update stay on the concrete client since
/// they usually wrap domain-specific payload handling.
#[async_trait]
pub trait ActorClient<T: Record>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every record, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: RecordId) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by ID, returning it if it existed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
