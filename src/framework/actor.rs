//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a
//! [`Repository`](crate::repository::Repository) and serves requests against it.
//! It implements the "Server" side of the Actor Model: messages are processed one
//! at a time, so the repository needs no locks.

use crate::framework::client::ResourceClient;
use crate::framework::message::ResourceRequest;
use crate::framework::record::Record;
use crate::identity::IdGenerator;
use crate::repository::Repository;
use tokio::sync::mpsc;
use tracing::info;

/// The generic actor that owns a repository of records.
///
/// # Concurrency Model
///
/// The actor is the only holder of its repository. Requests from any number of
/// cloned [`ResourceClient`]s queue up in one channel and are applied in arrival
/// order, so an update and a delete racing on the same id are simply linearized:
/// whichever arrives second sees the first one's effect.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2. **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3. **Stop**: drop every client; the loop ends once the channel is closed.
///
/// ```rust
/// use subscription_analytics::framework::ResourceActor;
/// use subscription_analytics::model::{Product, ProductDraft};
/// use subscription_analytics::repository::ProductRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::new(10, ProductRepository::new());
///     let handle = tokio::spawn(actor.run());
///
///     let product: Product = client.create(ProductDraft::new("Alpha", vec![])).await.unwrap();
///     assert_eq!(product.product_name, "Alpha");
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct ResourceActor<T: Record, G: IdGenerator> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    repository: Repository<T, G>,
}

impl<T: Record, G: IdGenerator> ResourceActor<T, G> {
    /// Creates a new `ResourceActor` around `repository` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `repository` - The store the actor takes ownership of, possibly pre-seeded.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is zero. [`AppConfig::validate`](crate::config::AppConfig::validate)
    /// rejects that value before it gets here.
    pub fn new(buffer_size: usize, repository: Repository<T, G>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            repository,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// Records leave the actor as clones; the repository itself never escapes the task.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, size = self.repository.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items = self.repository.list().to_vec();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.repository.get(id.as_str()).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { draft, respond_to } => {
                    let item = self.repository.create(draft).clone();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    draft,
                    respond_to,
                } => {
                    let item = self.repository.update(id.as_str(), draft).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let item = self.repository.delete(id.as_str());
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.repository.len(), "Shutdown");
    }
}
