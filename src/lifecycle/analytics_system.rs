//! # Analytics System
//!
//! [`AnalyticsSystem`] turns an [`AppConfig`] into a running product actor and
//! stops it again. It owns the actor's task handle; callers only see the
//! [`ProductClient`] and the configured [`SeriesGenerator`].

use thiserror::Error;
use tracing::{error, info};

use crate::clients::ProductClient;
use crate::config::{AppConfig, ConfigError};
use crate::fixtures::stub_products;
use crate::repository::ProductRepository;
use crate::series::SeriesGenerator;

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the analytics product store.
///
/// `AnalyticsSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product actor
/// - **Configuration**: Applying [`AppConfig`] (mailbox size, seeding, series policy)
/// - **Caller Tooling**: Handing out the [`SeriesGenerator`] used for quick submission
///
/// # Example
///
/// ```ignore
/// let system = AnalyticsSystem::new(&AppConfig::default())?;
///
/// let product = system.product_client.create_product(draft).await?;
/// let totals = system.product_client.totals(product.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct AnalyticsSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Generator configured from [`AppConfig::series`]
    pub series_generator: SeriesGenerator,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl AnalyticsSystem {
    /// Validates `config`, builds the repository and spawns the product actor.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration does not validate.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let series_generator = SeriesGenerator::new(config.series.clone())?;

        let mut repository = ProductRepository::new();
        if config.seed_stub_products {
            repository = repository.with_records(stub_products());
        }

        let (actor, product_client) = crate::product_actor::new(config.channel_buffer, repository);
        let handle = tokio::spawn(actor.run());

        info!(
            channel_buffer = config.channel_buffer,
            seeded = config.seed_stub_products,
            "System started"
        );

        Ok(Self {
            product_client,
            series_generator,
            handle,
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the actor's channel, then waits for the actor
    /// task to finish. Clones of the client handed out earlier keep the actor
    /// alive until they are dropped too.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::ActorTaskFailed`] if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(SystemError::from(e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
