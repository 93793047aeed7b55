use std::fs;
use std::path::PathBuf;

use pgrest_configuration::FilterLimits;
use query_engine_metadata::metadata::RelationInfo;
use query_engine_sql::sql;
use query_engine_translation::translation;

/// Translate the request in a golden-file directory against the catalog
/// stored next to it, returning the SQL and its numbered parameters.
pub fn test_translation(
    testname: &str,
) -> Result<(String, Vec<(usize, String)>), translation::error::Error> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let relation: RelationInfo = match fs::read_to_string(directory.join("relation.json")) {
        Ok(contents) => serde_json::from_str(&contents).unwrap(),
        Err(_) => RelationInfo::default(),
    };
    let body = fs::read(directory.join("request.json")).unwrap();

    let spec = translation::query::request::normalize(&body, 10_000, &FilterLimits::default())?;
    let plan = translation::query::translate(&relation, &spec);
    let query = plan.query_sql();
    let params = query
        .params
        .iter()
        .enumerate()
        .map(|(i, sql::string::Param::String(p))| (i + 1, p.clone()))
        .collect();

    Ok((query.sql, params))
}
