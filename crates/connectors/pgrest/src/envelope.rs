//! The uniform response body of every endpoint.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use query_engine_execution::values::format_microseconds;
use query_engine_execution::Row;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status_code: u16,
    /// a short summary of the response
    pub message: String,
    /// a longer explanation of the response
    pub description: String,
    /// the number of rows in `data`, for endpoints returning rows
    pub count: usize,
    /// time taken to process the request, as `H:MM:SS.ffffff`
    pub duration: String,
    pub data: serde_json::Value,
}

impl Envelope {
    /// A successful response carrying rows.
    pub fn rows(message: &str, description: &str, rows: Vec<Row>, started: Instant) -> Envelope {
        let data: Vec<serde_json::Value> = rows
            .into_iter()
            .map(|row| serde_json::Value::Object(row.into_iter().collect()))
            .collect();
        Envelope {
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            description: description.to_string(),
            count: data.len(),
            duration: format_duration(started.elapsed()),
            data: serde_json::Value::Array(data),
        }
    }

    /// A successful response carrying a single document, or nothing.
    pub fn document(
        message: &str,
        description: &str,
        data: serde_json::Value,
        started: Instant,
    ) -> Envelope {
        Envelope {
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            description: description.to_string(),
            count: 0,
            duration: format_duration(started.elapsed()),
            data,
        }
    }

    /// A failed response. The message is the reason phrase of the status.
    pub fn error(status: StatusCode, description: String, started: Instant) -> Envelope {
        Envelope {
            status_code: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Error").to_string(),
            description,
            count: 0,
            duration: format_duration(started.elapsed()),
            data: serde_json::Value::Array(vec![]),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Render an elapsed time as `H:MM:SS.ffffff`.
pub fn format_duration(elapsed: Duration) -> String {
    format_microseconds(i128::try_from(elapsed.as_micros()).unwrap_or(i128::MAX))
}
