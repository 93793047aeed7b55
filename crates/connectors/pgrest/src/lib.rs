//! An HTTP service giving generic read access to a PostgreSQL database.

pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;
