mod common;

use query_engine_translation::translation::error::Error;
use similar_asserts::assert_eq;

fn params(values: &[&str]) -> Vec<(usize, String)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i + 1, (*v).to_string()))
        .collect()
}

#[test]
fn select_star() {
    let (sql, parameters) = common::test_translation("select_star").unwrap();
    assert_eq!(sql, r#"SELECT * FROM "public"."cars" LIMIT 100 OFFSET 0"#);
    assert!(parameters.is_empty());
}

#[test]
fn select_fields_with_filter() {
    let (sql, parameters) = common::test_translation("select_fields_with_filter").unwrap();
    assert_eq!(
        sql,
        r#"SELECT "id" FROM "public"."cars" WHERE ("manufacturer" = CAST($1 AS character varying)) LIMIT 100 OFFSET 0"#
    );
    assert_eq!(parameters, params(&["BMW"]));
}

#[test]
fn nested_filter_with_ordering() {
    let (sql, parameters) = common::test_translation("nested_filter_with_ordering").unwrap();
    assert_eq!(
        sql,
        r#"SELECT "id", "model", "price" FROM "public"."cars" WHERE (("manufacturer" = CAST($1 AS character varying)) OR NOT ("price" < CAST($2 AS integer)) OR ("model" ILIKE $3)) ORDER BY "price", "id" DESC LIMIT 5 OFFSET 2"#
    );
    assert_eq!(parameters, params(&["Audi", "50000", "%x%"]));
}

#[test]
fn limit_is_clamped() {
    let (sql, _) = common::test_translation("limit_is_clamped").unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "sales"."orders" LIMIT 10000 OFFSET 30"#
    );
}

#[test]
fn and_with_a_single_child_is_rejected() {
    assert_eq!(
        common::test_translation("and_with_a_single_child"),
        Err(Error::TooFewChildren {
            operator: "and",
            found: 1
        })
    );
}
