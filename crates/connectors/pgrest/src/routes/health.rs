use std::time::Instant;

use axum::extract::State;
use serde_json::json;

use query_engine_execution::health;

use crate::envelope::Envelope;
use crate::error::ServerError;
use crate::state::ServerState;

/// Report that the service is up, and whether the database is reachable.
pub async fn get_health(State(state): State<ServerState>) -> Envelope {
    let started = Instant::now();
    match health::check_connection(&state.configuration).await {
        Ok(reachable) => Envelope::document(
            "Service api",
            "Contains information about the basic status of this service",
            json!({
                "status": "Up",
                "db_connection": if reachable { "OK" } else { "NOK" },
            }),
            started,
        ),
        Err(err) => {
            let mut envelope = ServerError::Internal(format!(
                "We could not evaluate the service status. Error: {err}"
            ))
            .into_envelope(started);
            envelope.data = json!({"status": "Error", "db_connection": "NOK"});
            envelope
        }
    }
}
