use axum::extract::State;

use crate::error::ServerError;
use crate::state::ServerState;

/// Expose the metrics registry in the Prometheus text format.
pub async fn get_metrics(State(state): State<ServerState>) -> Result<String, ServerError> {
    prometheus::TextEncoder::new()
        .encode_to_string(&state.metrics_registry.gather())
        .map_err(|err| ServerError::Internal(format!("Could not encode metrics. Error: {err}")))
}
