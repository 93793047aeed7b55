//! The HTTP routes of the service.

mod fallback;
mod health;
mod metrics;
mod query;
mod schema;

use axum::routing::{get, post};
use axum::Router;

use crate::state::ServerState;

pub use fallback::{method_not_allowed, not_found};
pub use health::get_health;
pub use metrics::get_metrics;
pub use query::post_query_select;
pub use schema::{delete_schema, get_schema, get_schemas, post_schema};

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/query/select",
            post(post_query_select).fallback(method_not_allowed),
        )
        .route("/health/", get(get_health).fallback(method_not_allowed))
        .route(
            "/schema/",
            get(get_schemas)
                .post(post_schema)
                .fallback(method_not_allowed),
        )
        .route(
            "/schema/:schema",
            get(get_schema)
                .delete(delete_schema)
                .fallback(method_not_allowed),
        )
        .route("/metrics", get(get_metrics).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}
