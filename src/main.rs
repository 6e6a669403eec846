//! # Subscription Analytics Demo
//!
//! Starts the system from configuration and walks one product through its whole
//! lifecycle, then quick-creates a second one:
//!
//! 1. Create "Alpha" with no history.
//! 2. Replace it with "Alpha2" and one month of data, then read its totals.
//! 3. Quick-create a product with a generated series.
//! 4. Delete "Alpha" and show it is gone.

use subscription_analytics::config::AppConfig;
use subscription_analytics::framework::ActorClient;
use subscription_analytics::lifecycle::{setup_tracing, AnalyticsSystem};
use subscription_analytics::model::{MetricPoint, ProductDraft};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(?config, "Starting analytics system");

    let system = AnalyticsSystem::new(&config)?;
    let client = system.product_client.clone();

    let span = tracing::info_span!("alpha_lifecycle");
    async {
        let alpha = client
            .create_product(ProductDraft::new("Alpha", Vec::new()))
            .await?;
        info!(id = %alpha.id, "Product created");

        let draft = ProductDraft::new("Alpha2", vec![MetricPoint::new("Jan 2024", 10, 2)]);
        if client.update_product(alpha.id.clone(), draft).await?.is_none() {
            warn!(id = %alpha.id, "Product vanished before update");
        }

        if let Some(totals) = client.totals(alpha.id.clone()).await? {
            info!(
                new_subs = totals.new_subs,
                cancellations = totals.cancellations,
                active = totals.active,
                "Totals"
            );
        }

        let quick = client
            .quick_create("Quick Beta", &system.series_generator)
            .await?;
        info!(id = %quick.id, months = quick.subscription_metrics.len(), "Quick product created");

        client.delete(alpha.id.clone()).await?;
        let remaining = client.list().await?;
        let gone = client.get(alpha.id.clone()).await?.is_none();
        info!(gone, remaining = remaining.len(), "Product deleted");

        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
