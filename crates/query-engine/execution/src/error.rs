//! Errors for query execution.

use pgrest_configuration::ConfigurationError;
use query_engine_translation::translation;

/// Everything that can go wrong while serving a request.
///
/// `Validation` is the client's fault; everything else is ours.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] translation::error::Error),
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
