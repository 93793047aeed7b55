//! Scenario tests against a live PostgreSQL instance.
//!
//! Run with `cargo test -- --ignored`; the connection is taken from the
//! `PGREST_DB_*` variables.

use axum::http::StatusCode;
use serde_json::json;
use similar_asserts::assert_eq;

use pgrest::envelope::Envelope;
use tests_common::fixtures::TestTable;
use tests_common::router::{create_router, test_configuration};

async fn select(body: serde_json::Value) -> (StatusCode, Envelope) {
    let client = axum_test_helper::TestClient::new(create_router(test_configuration()).await);
    let response = client
        .post("/query/select")
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .send()
        .await;
    let status = response.status();
    (status, response.json().await)
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn select_all_columns() {
    let configuration = test_configuration();
    let cars = TestTable::cars(&configuration).await.unwrap();

    let (status, envelope) = select(json!({
        "schema": &cars.schema,
        "relation": &cars.relation
    }))
    .await;
    cars.drop(&configuration).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.count, 10);
    assert_eq!(envelope.data.as_array().unwrap().len(), 10);
    insta::assert_json_snapshot!(envelope.data[0], @r###"
    {
      "id": 1,
      "manufacturer": "BMW",
      "type": "760i",
      "licenseplate": "M-VL-2515",
      "registered_at": "2019-03-07T09:05:00.000000"
    }
    "###);
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn select_projected_column() {
    let configuration = test_configuration();
    let cars = TestTable::cars(&configuration).await.unwrap();

    let (status, envelope) = select(json!({
        "schema": &cars.schema,
        "relation": &cars.relation,
        "fields": ["id"]
    }))
    .await;
    cars.drop(&configuration).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.count, 10);
    assert_eq!(envelope.data[0], json!({"id": 1}));
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn select_with_filter_and_ordering() {
    let configuration = test_configuration();
    let cars = TestTable::cars(&configuration).await.unwrap();

    let (status, envelope) = select(json!({
        "schema": &cars.schema,
        "relation": &cars.relation,
        "fields": ["id", "type"],
        "filter": {"column": "manufacturer", "operator": "=", "value": "BMW"},
        "order_fields": ["id"],
        "order_type": "desc"
    }))
    .await;
    cars.drop(&configuration).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        envelope.data,
        json!([{"id": 2, "type": "325i"}, {"id": 1, "type": "760i"}])
    );
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn select_compares_numbers_as_numbers() {
    let configuration = test_configuration();
    let cars = TestTable::cars(&configuration).await.unwrap();

    let (status, envelope) = select(json!({
        "schema": &cars.schema,
        "relation": &cars.relation,
        "fields": ["id"],
        "filter": {
            "operator": "and",
            "children": [
                {"column": "id", "operator": ">", "value": "8"},
                {"operator": "not", "children": [
                    {"column": "licenseplate", "operator": "ilike", "value": "k-op%"}
                ]}
            ]
        }
    }))
    .await;
    cars.drop(&configuration).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.data, json!([{"id": 9}]));
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn filter_values_are_not_truncated_to_the_column_type() {
    let configuration = test_configuration();
    let table = TestTable::create(
        &configuration,
        "parts",
        "code varchar(3) NOT NULL, price numeric(6, 2) NOT NULL",
        "INSERT INTO {table} (code, price) VALUES ('BMW', 20.00)",
    )
    .await
    .unwrap();

    let (code_status, by_code) = select(json!({
        "schema": &table.schema,
        "relation": &table.relation,
        "filter": {"column": "code", "operator": "=", "value": "BMW-X5"}
    }))
    .await;
    let (price_status, by_price) = select(json!({
        "schema": &table.schema,
        "relation": &table.relation,
        "filter": {"column": "price", "operator": "=", "value": "19.999"}
    }))
    .await;
    let (_, exact) = select(json!({
        "schema": &table.schema,
        "relation": &table.relation,
        "filter": {"column": "price", "operator": "=", "value": "20"}
    }))
    .await;
    table.drop(&configuration).await.unwrap();

    assert_eq!(code_status, StatusCode::OK);
    assert_eq!(by_code.count, 0);
    assert_eq!(price_status, StatusCode::OK);
    assert_eq!(by_price.count, 0);
    assert_eq!(exact.data, json!([{"code": "BMW", "price": 20.0}]));
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn select_arrays_and_network_types() {
    let configuration = test_configuration();
    let table = TestTable::create(
        &configuration,
        "hosts",
        "id int NOT NULL, tags text[], ports int4[], ip inet, mask cidr, \
         mac macaddr, cost money, opened timetz, note xml",
        "INSERT INTO {table} VALUES (1, '{web,NULL,db}', '{80,443}', '192.168.0.1', \
         '10.1.0.0/16', '08:00:2b:01:02:03', 12.5, '04:05:06+02', '<ok/>')",
    )
    .await
    .unwrap();

    let (status, envelope) = select(json!({
        "schema": &table.schema,
        "relation": &table.relation
    }))
    .await;
    table.drop(&configuration).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        envelope.data,
        json!([{
            "id": 1,
            "tags": ["web", null, "db"],
            "ports": [80, 443],
            "ip": "192.168.0.1",
            "mask": "10.1.0.0/16",
            "mac": "08:00:2b:01:02:03",
            "cost": 12.5,
            "opened": "04:05:06.000000+02:00",
            "note": "<ok/>"
        }])
    );
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn select_from_a_missing_relation_is_a_server_error() {
    let (status, envelope) = select(json!({
        "schema": "public",
        "relation": "no_such_relation_for_pgrest"
    }))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.count, 0);
    assert!(envelope.description.starts_with("Could not query data."));
}

#[tokio::test]
#[ignore = "needs a PostgreSQL database"]
async fn create_get_and_drop_a_schema() {
    let client = axum_test_helper::TestClient::new(create_router(test_configuration()).await);
    let name = format!("pgrest_schema_{}", std::process::id());

    let response = client
        .post("/schema/")
        .header("Content-Type", "application/json")
        .body(json!({"schema": name}).to_string())
        .send()
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Envelope = client.get(&format!("/schema/{name}")).send().await.json().await;
    assert_eq!(envelope.count, 1);
    assert_eq!(envelope.data[0]["schema_name"], json!(name));

    let response = client.delete(&format!("/schema/{name}")).send().await;
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Envelope = client.get(&format!("/schema/{name}")).send().await.json().await;
    assert_eq!(envelope.count, 0);
}
