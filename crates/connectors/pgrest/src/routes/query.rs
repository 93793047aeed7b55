use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;

use query_engine_execution::error::Error;
use query_engine_execution::query;
use query_engine_translation::translation::query::request;

use crate::envelope::Envelope;
use crate::error::ServerError;
use crate::state::ServerState;

/// Select rows from a table or view.
///
/// The body is read raw so that an empty or malformed body gets the same
/// envelope as any other invalid request.
pub async fn post_query_select(State(state): State<ServerState>, body: Bytes) -> Envelope {
    let started = Instant::now();
    let configuration = &state.configuration;

    let spec = match request::normalize(
        &body,
        configuration.max_results,
        &configuration.filter_limits,
    ) {
        Ok(spec) => spec,
        Err(err) => {
            state.metrics.record_validation_error();
            return ServerError::from_execution("Could not query data.", &Error::Validation(err))
                .into_envelope(started);
        }
    };

    match query::select(configuration, &state.metrics, &spec).await {
        Ok(rows) => Envelope::rows("Get data", "Get data from table or view", rows, started),
        Err(err) => ServerError::from_execution("Could not query data.", &err).into_envelope(started),
    }
}
