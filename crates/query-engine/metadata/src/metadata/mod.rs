//! Metadata information regarding the database relations a query runs against.

pub mod database;

// re-export without modules
pub use database::*;
