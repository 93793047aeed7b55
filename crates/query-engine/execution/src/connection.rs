//! Open and close the per-request database connection.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{info_span, Instrument};

use pgrest_configuration::ConnectionParameters;

use crate::error::Error;

/// Open a new connection with the configured parameters.
pub async fn connect(parameters: &ConnectionParameters) -> Result<PgConnection, Error> {
    parameters.validate()?;

    let options = PgConnectOptions::new()
        .host(&parameters.host)
        .port(parameters.port)
        .database(&parameters.dbname)
        .username(&parameters.user)
        .password(&parameters.password);

    let connection = options
        .connect()
        .instrument(info_span!(
            "Connect to database",
            host = %parameters.host,
            port = parameters.port,
            dbname = %parameters.dbname,
        ))
        .await?;
    Ok(connection)
}

/// Close a connection. Failing to say goodbye to the server is not an error
/// for the request, so it is only logged.
pub async fn close(connection: PgConnection) {
    if let Err(err) = connection.close().await {
        tracing::warn!(error = %err, "failed to close database connection");
    }
}
