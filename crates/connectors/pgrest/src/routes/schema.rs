use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use serde::Deserialize;

use query_engine_execution::schema;

use crate::envelope::Envelope;
use crate::error::ServerError;
use crate::state::ServerState;

const SCHEMA_DESCRIPTION: &str = "Lists all available schemata in the database";
const CONNECTION_ERROR: &str = "We could not connect to the database. Perhaps the connection is \
                                wrong or the database is not reachable at the moment.";

/// The body of a schema creation request. Older clients send `name`.
#[derive(Debug, Deserialize)]
struct CreateSchemaRequest {
    #[serde(alias = "name")]
    schema: Option<String>,
}

pub async fn get_schemas(State(state): State<ServerState>) -> Envelope {
    let started = Instant::now();
    match schema::list_schemas(&state.configuration).await {
        Ok(rows) => Envelope::rows("DB schema", SCHEMA_DESCRIPTION, rows, started),
        Err(err) => ServerError::from_execution(CONNECTION_ERROR, &err).into_envelope(started),
    }
}

pub async fn get_schema(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Envelope {
    let started = Instant::now();
    match schema::get_schema(&state.configuration, &name).await {
        Ok(rows) => Envelope::rows(
            "DB schema",
            "Information about a schema in the database",
            rows,
            started,
        ),
        Err(err) => ServerError::from_execution(CONNECTION_ERROR, &err).into_envelope(started),
    }
}

pub async fn post_schema(State(state): State<ServerState>, body: Bytes) -> Envelope {
    let started = Instant::now();

    let name = serde_json::from_slice::<CreateSchemaRequest>(&body)
        .ok()
        .and_then(|request| request.schema)
        .filter(|name| !name.is_empty());
    let Some(name) = name else {
        return ServerError::BadRequest("You need to provide a name for the schema".to_string())
            .into_envelope(started);
    };

    match schema::create_schema(&state.configuration, &name).await {
        Ok(()) => Envelope::document(
            "Schema created",
            "The schema was successfully created in the database",
            serde_json::Value::Array(vec![]),
            started,
        ),
        Err(err) => ServerError::from_execution(
            "There was an error while creating the new schema.",
            &err,
        )
        .into_envelope(started),
    }
}

pub async fn delete_schema(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Envelope {
    let started = Instant::now();
    match schema::drop_schema(&state.configuration, &name).await {
        Ok(()) => Envelope::document(
            "Schema deleted",
            "The schema was successfully deleted in the database",
            serde_json::Value::Array(vec![]),
            started,
        ),
        Err(err) => {
            ServerError::from_execution("There was an error while deleting the schema.", &err)
                .into_envelope(started)
        }
    }
}
