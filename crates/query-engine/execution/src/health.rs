//! Check that the database is reachable.

use sqlx::Connection;

use pgrest_configuration::Configuration;

use crate::connection;
use crate::error::Error;

/// Connect, ping and disconnect. `Ok(false)` means the database could not be
/// reached; `Err` means the check itself could not be made.
pub async fn check_connection(configuration: &Configuration) -> Result<bool, Error> {
    configuration.connection.validate()?;

    let mut connection = match connection::connect(&configuration.connection).await {
        Ok(connection) => connection,
        Err(err) => {
            tracing::warn!(error = %err, "database is not reachable");
            return Ok(false);
        }
    };
    let reachable = match connection.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "database did not answer");
            false
        }
    };
    connection::close(connection).await;
    Ok(reachable)
}
