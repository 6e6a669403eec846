//! # Mock Helpers & Testing Guide
//!
//! Client wrappers such as [`ProductClient`](crate::clients::ProductClient) can be
//! tested without spawning an actor. [`create_mock_client`] hands back a real
//! [`ResourceClient`] wired to a channel the test owns; the `expect_*` helpers pull
//! the next request off that channel, let the test assert on it, and return the
//! responder so the test decides the answer.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock channel | Real Actor |
//! |---------|--------------|------------|
//! | **State** | None, the test answers | Real repository |
//! | **Use Case** | Logic *around* the client | The actor or the whole system |
//! | **Error Injection** | Easy (send `Err`, or drop the responder) | Needs a dead actor |
//!
//! ## Example
//!
//! ```rust
//! use subscription_analytics::framework::mock::{create_mock_client, expect_get};
//! use subscription_analytics::model::{Product, RecordId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Product>(10);
//!
//!     let task = tokio::spawn(async move { client.get(RecordId::from("p1")).await });
//!
//!     let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
//!     assert_eq!(id.as_str(), "p1");
//!     responder.send(Ok(None)).unwrap();
//!
//!     assert_eq!(task.await.unwrap().unwrap(), None);
//! }
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::message::{ResourceRequest, Response};
use crate::framework::record::Record;
use crate::model::RecordId;
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// Instead of a `ResourceActor`, the client talks to a channel the test controls,
/// so the test can inspect each request and simulate success, absence or failure.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(RecordId, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Draft, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(RecordId, T::Draft, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            draft,
            respond_to,
        }) => Some((id, draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(RecordId, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::FrameworkError;
    use crate::model::{Product, ProductDraft};

    #[tokio::test]
    async fn test_mock_client_create() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task =
            tokio::spawn(async move { client.create(ProductDraft::new("Test", vec![])).await });

        let (draft, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(draft.product_name, "Test");
        responder
            .send(Ok(Product::new("p1", draft.product_name, draft.subscription_metrics)))
            .unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(product) if product.id.as_str() == "p1"));
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_actor_dropped() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let list_task = tokio::spawn(async move { client.list().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        drop(responder);

        assert_eq!(list_task.await.unwrap(), Err(FrameworkError::ActorDropped));
    }

    #[tokio::test]
    async fn test_closed_receiver_surfaces_as_actor_closed() {
        let (client, receiver) = create_mock_client::<Product>(10);
        drop(receiver);

        let result = client.delete(RecordId::from("p1")).await;

        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }

    #[tokio::test]
    async fn test_expect_helpers_reject_other_requests() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        tokio::spawn(async move { client.list().await });

        assert!(expect_get(&mut receiver).await.is_none());
    }
}
