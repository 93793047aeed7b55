//! Schema management passthroughs.

use sqlx::Executor;
use tracing::{info_span, Instrument};

use pgrest_configuration::Configuration;
use query_engine_sql::sql;
use query_engine_translation::translation::helpers::validate_identifier;

use crate::connection;
use crate::error::Error;
use crate::query::fetch_rows;
use crate::Row;

/// List the names of all schemata, at most `max_results` of them.
pub async fn list_schemas(configuration: &Configuration) -> Result<Vec<Row>, Error> {
    let mut query = sql::string::SQL::new();
    query.append_syntax("SELECT schema_name FROM information_schema.schemata LIMIT ");
    query.append_syntax(&configuration.max_results.to_string());

    fetch(configuration, &query, "list schemas").await
}

/// The catalog entry of one schema; empty if it does not exist.
pub async fn get_schema(configuration: &Configuration, name: &str) -> Result<Vec<Row>, Error> {
    let mut query = sql::string::SQL::new();
    query.append_syntax("SELECT * FROM information_schema.schemata WHERE schema_name = ");
    query.append_param(sql::string::Param::String(name.to_string()));

    fetch(configuration, &query, "get schema").await
}

/// Create a schema unless it already exists.
pub async fn create_schema(configuration: &Configuration, name: &str) -> Result<(), Error> {
    let statement = sql::ast::SchemaStatement::Create(schema_name(name)?);
    execute(configuration, &statement, "create schema").await
}

/// Drop a schema and everything in it, if it exists.
pub async fn drop_schema(configuration: &Configuration, name: &str) -> Result<(), Error> {
    let statement = sql::ast::SchemaStatement::Drop(schema_name(name)?);
    execute(configuration, &statement, "drop schema").await
}

fn schema_name(name: &str) -> Result<sql::ast::SchemaName, Error> {
    validate_identifier("schema", name)?;
    Ok(sql::ast::SchemaName(name.to_string()))
}

async fn fetch(
    configuration: &Configuration,
    query: &sql::string::SQL,
    operation: &'static str,
) -> Result<Vec<Row>, Error> {
    let result = async {
        let mut connection = connection::connect(&configuration.connection).await?;
        let result = fetch_rows(&mut connection, query).await;
        connection::close(connection).await;
        result
    }
    .instrument(info_span!("Schema", operation))
    .await;

    log_failure(operation, &result);
    result
}

async fn execute(
    configuration: &Configuration,
    statement: &sql::ast::SchemaStatement,
    operation: &'static str,
) -> Result<(), Error> {
    let query = sql::execution_plan::schema_statement_to_sql(statement);
    tracing::debug!(generated_sql = %query.sql);

    let result = async {
        let mut connection = connection::connect(&configuration.connection).await?;
        let result = connection
            .execute(query.sql.as_str())
            .await
            .map(|_| ())
            .map_err(Error::from);
        connection::close(connection).await;
        result
    }
    .instrument(info_span!("Schema", operation))
    .await;

    log_failure(operation, &result);
    result
}

fn log_failure<T>(operation: &'static str, result: &Result<T, Error>) {
    if let Err(err) = result {
        tracing::error!(error = %err, operation, "schema operation failed");
    }
}
