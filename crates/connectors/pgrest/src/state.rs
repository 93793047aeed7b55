//! Transient state used by the server.
//!
//! This is initialized on startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, Instrument};

use pgrest_configuration::Configuration;
use query_engine_execution::metrics;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct ServerState {
    pub configuration: Arc<Configuration>,
    pub metrics: metrics::Metrics,
    pub metrics_registry: prometheus::Registry,
}

/// Register metrics and wrap the configuration for sharing between handlers.
pub async fn create_state(configuration: Configuration) -> Result<ServerState, InitializationError> {
    let mut metrics_registry = prometheus::Registry::new();

    let metrics = async {
        metrics::Metrics::initialize(&mut metrics_registry).map_err(InitializationError::MetricsError)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    configuration
        .connection
        .validate()
        .map_err(InitializationError::ConfigurationError)?;

    Ok(ServerState {
        configuration: Arc::new(configuration),
        metrics,
        metrics_registry,
    })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
    #[error("{0}")]
    ConfigurationError(pgrest_configuration::ConfigurationError),
}
