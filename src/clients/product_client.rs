//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes what a request handler or
//! dashboard needs: CRUD, quick submission and per-product totals.
use crate::aggregate::SubscriptionTotals;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Product, ProductDraft, RecordId};
use crate::product_actor::ProductError;
use crate::series::SeriesGenerator;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Stores a new product and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(draft).await?)
    }

    /// Replaces every field of product `id` with `draft`.
    ///
    /// Returns `Ok(None)` if no such product exists.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: RecordId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, draft).await?)
    }

    /// Quick submission: creates a product whose history is generated rather
    /// than supplied.
    #[instrument(skip(self, generator))]
    pub async fn quick_create(
        &self,
        product_name: &str,
        generator: &SeriesGenerator,
    ) -> Result<Product, ProductError> {
        let draft = {
            let mut rng = rand::rng();
            generator.quick_draft(product_name, &mut rng)
        };
        info!(months = draft.subscription_metrics.len(), "Generated series");
        self.create_product(draft).await
    }

    /// Dashboard totals for product `id`, or `Ok(None)` if it does not exist.
    #[instrument(skip(self))]
    pub async fn totals(&self, id: RecordId) -> Result<Option<SubscriptionTotals>, ProductError> {
        let product = self.get(id).await?;
        Ok(product.map(|p| SubscriptionTotals::from_series(&p.subscription_metrics)))
    }
}
