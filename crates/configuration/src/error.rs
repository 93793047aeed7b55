//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use crate::environment::{self, Variable};

/// The configuration file could not be read or is malformed.
#[derive(Debug, thiserror::Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {0}, expected 1")]
    UnsupportedVersion(u32),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The runtime configuration could not be built from the parsed configuration.
#[derive(Debug, thiserror::Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("{0}")]
    Environment(#[from] environment::Error),
    #[error("invalid value {value:?} for {variable}: {message}")]
    InvalidEnvironmentValue {
        variable: Variable,
        value: String,
        message: String,
    },
}

/// A required connection parameter is missing when it is needed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing required parameter '{0}' for the database connection")]
    MissingParameter(&'static str),
}
