//! Build the service router for tests.

use axum_test_helper::TestClient;

use pgrest_configuration::environment::ProcessEnvironment;
use pgrest_configuration::{make_runtime_configuration, Configuration, ParsedConfiguration};

/// The default configuration, with the `PGREST_*` variables of the test
/// environment applied.
pub fn test_configuration() -> Configuration {
    make_runtime_configuration(ParsedConfiguration::empty(), ProcessEnvironment)
        .expect("the test environment should describe a valid configuration")
}

/// Creates a router with a fresh state.
pub async fn create_router(configuration: Configuration) -> axum::Router {
    let _ = env_logger::builder().is_test(true).try_init();

    let state = pgrest::state::create_state(configuration)
        .await
        .expect("server state should initialize");
    pgrest::routes::create_router(state)
}

/// Creates a test client talking to a router built from the test configuration.
pub async fn create_client() -> TestClient {
    TestClient::new(create_router(test_configuration()).await)
}
