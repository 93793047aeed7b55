//! Read the column catalog of a relation.

use sqlx::postgres::PgConnection;

use query_engine_metadata::metadata::RelationInfo;

use crate::error::Error;

const RELATION_COLUMNS: &str = "\
SELECT a.attname::text, pg_catalog.format_type(a.atttypid, NULL) \
FROM pg_catalog.pg_attribute a \
JOIN pg_catalog.pg_class c ON c.oid = a.attrelid \
JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace \
WHERE n.nspname = $1 AND c.relname = $2 AND a.attnum > 0 AND NOT a.attisdropped \
ORDER BY a.attnum";

/// Look up the columns of `schema.relation`. A relation that does not exist
/// yields no columns; the select that follows reports the error.
pub async fn relation_info(
    connection: &mut PgConnection,
    schema: &str,
    relation: &str,
) -> Result<RelationInfo, Error> {
    let columns: Vec<(String, String)> = sqlx::query_as(RELATION_COLUMNS)
        .bind(schema)
        .bind(relation)
        .fetch_all(connection)
        .await?;

    Ok(columns
        .into_iter()
        .fold(RelationInfo::new(schema, relation), |info, (name, type_name)| {
            info.with_column(name, type_name)
        }))
}
