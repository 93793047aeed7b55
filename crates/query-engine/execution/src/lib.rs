//! Query execution against a PostgreSQL database.

pub mod catalog;
pub mod connection;
pub mod error;
pub mod health;
pub mod metrics;
pub mod query;
pub mod schema;
pub mod values;

/// A result row: column name to JSON value, in the order the database returned them.
pub type Row = indexmap::IndexMap<String, serde_json::Value>;
