//! # Product Actor
//!
//! Wires the product [`Repository`](crate::repository::Repository) into a
//! [`ResourceActor`] and wraps the resulting client in a [`ProductClient`].
//!
//! ## Structure
//!
//! - [`error`] - [`ProductError`] type for the product client
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use subscription_analytics::model::ProductDraft;
//! use subscription_analytics::product_actor;
//! use subscription_analytics::repository::ProductRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32, ProductRepository::new());
//!     tokio::spawn(actor.run());
//!
//!     let product = client.create_product(ProductDraft::new("Widget", vec![])).await?;
//!     assert!(!product.id.is_empty());
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::identity::IdGenerator;
use crate::model::Product;
use crate::repository::ProductRepository;

/// Creates a new Product actor over `repository`, and its client.
pub fn new<G: IdGenerator>(
    buffer_size: usize,
    repository: ProductRepository<G>,
) -> (ResourceActor<Product, G>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, repository);
    (actor, ProductClient::new(generic_client))
}
