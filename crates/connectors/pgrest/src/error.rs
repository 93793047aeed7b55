//! Map failures to HTTP responses.

use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use query_engine_execution::error::Error;

use crate::envelope::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error("The requested URL was not found on the server.")]
    NotFound,
    #[error("The method is not allowed for the requested URL.")]
    MethodNotAllowed,
}

impl ServerError {
    /// Classify an execution error. `context` prefixes server faults so the
    /// client can tell which operation failed.
    pub fn from_execution(context: &str, err: &Error) -> ServerError {
        if err.is_client_error() {
            ServerError::BadRequest(err.to_string())
        } else {
            ServerError::Internal(format!("{context} Error: {err}"))
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn into_envelope(self, started: Instant) -> Envelope {
        let status = self.status();
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!(error = %self, "request failed"),
            _ => tracing::warn!(error = %self, "request rejected"),
        }
        Envelope::error(status, self.to_string(), started)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        self.into_envelope(Instant::now()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pgrest_configuration::ConfigurationError;
    use query_engine_translation::translation;

    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = Error::Validation(translation::error::Error::EmptyRequest);
        let server_error = ServerError::from_execution("Could not query data.", &err);
        assert_eq!(server_error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            server_error.to_string(),
            "No arguments provided for querying the database."
        );
    }

    #[test]
    fn other_errors_are_internal() {
        let err = Error::Configuration(ConfigurationError::MissingParameter("host"));
        let server_error = ServerError::from_execution("Could not query data.", &err);
        assert_eq!(server_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            server_error.to_string(),
            "Could not query data. Error: missing required parameter 'host' for the database connection"
        );
    }
}
