//! Execute a select request against the database.

use sqlx::postgres::{PgArguments, PgConnection};
use tracing::{info_span, Instrument};

use pgrest_configuration::Configuration;
use query_engine_sql::sql;
use query_engine_translation::translation;
use translation::query::request::QuerySpec;

use crate::catalog;
use crate::connection;
use crate::error::Error;
use crate::metrics;
use crate::values;
use crate::Row;

/// Run a select request on a fresh connection and return the mapped rows.
///
/// The connection is closed on every path. Failures are logged here and
/// counted as database errors.
pub async fn select(
    configuration: &Configuration,
    metrics: &metrics::Metrics,
    spec: &QuerySpec,
) -> Result<Vec<Row>, Error> {
    let result = async {
        let mut connection = connection::connect(&configuration.connection).await?;
        let result = run_select(&mut connection, metrics, spec).await;
        connection::close(connection).await;
        result
    }
    .instrument(info_span!(
        "Select",
        schema = %spec.schema,
        relation = %spec.relation
    ))
    .await;

    match &result {
        Ok(rows) => {
            metrics.record_successful_query();
            tracing::info!(count = rows.len(), "query succeeded");
        }
        Err(err) if err.is_client_error() => {
            metrics.record_validation_error();
            tracing::warn!(error = %err, "query rejected");
        }
        Err(err) => {
            metrics.record_database_error();
            tracing::error!(
                error = %err,
                schema = %spec.schema,
                relation = %spec.relation,
                "query failed"
            );
        }
    }
    result
}

async fn run_select(
    connection: &mut PgConnection,
    metrics: &metrics::Metrics,
    spec: &QuerySpec,
) -> Result<Vec<Row>, Error> {
    let relation = catalog::relation_info(&mut *connection, &spec.schema, &spec.relation)
        .instrument(info_span!("Read relation catalog"))
        .await?;

    let plan = translation::query::translate(&relation, spec);
    let query = plan.query_sql();
    log_query(&query);

    let rows = {
        let _timer = metrics.time_query_execution();
        build_query_with_params(&query)
            .fetch_all(&mut *connection)
            .instrument(info_span!("Database request", relation = %plan.root_relation))
            .await?
    };
    tracing::debug!(relation = %plan.root_relation, rows = rows.len(), "fetched rows");

    rows.iter().map(values::row_to_json).collect()
}

/// Run a statement that returns rows, binding the given text parameters.
pub(crate) async fn fetch_rows(
    connection: &mut PgConnection,
    query: &sql::string::SQL,
) -> Result<Vec<Row>, Error> {
    log_query(query);
    let rows = build_query_with_params(query)
        .fetch_all(connection)
        .await?;
    rows.iter().map(values::row_to_json).collect()
}

/// Create a SQLx query based on our SQL query and bind our parameters to it.
fn build_query_with_params(
    query: &sql::string::SQL,
) -> sqlx::query::Query<'_, sqlx::Postgres, PgArguments> {
    query
        .params
        .iter()
        .fold(sqlx::query(query.sql.as_str()), |sqlx_query, param| match param {
            sql::string::Param::String(s) => sqlx_query.bind(s),
        })
}

fn log_query(query: &sql::string::SQL) {
    if tracing::enabled!(tracing::Level::DEBUG) {
        let pretty = sqlformat::format(
            &query.sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default(),
        );
        tracing::debug!(generated_sql = %pretty, params = query.params.len());
    }
}
