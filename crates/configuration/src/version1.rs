//! The serialized configuration format, version 1.

use std::path::Path;

use schemars::{gen::SchemaSettings, schema::RootSchema, JsonSchema};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::connection_settings::DatabaseConnectionSettings;
use crate::error::ParseConfigurationError;
use crate::values::FilterLimits;

const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const DEFAULT_MAX_RESULTS: u32 = 10_000;

/// Initial configuration, just enough to connect to a database and serve queries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Which version of the configuration format are we using
    #[serde(default = "version_default")]
    pub version: u32,
    #[serde(default)]
    pub connection_settings: DatabaseConnectionSettings,
    /// Upper bound for the `limit` of a query. Larger limits are clamped to it.
    #[serde(default = "max_results_default")]
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "FilterLimits::is_default")]
    pub filter: FilterLimits,
}

impl ParsedConfiguration {
    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            connection_settings: DatabaseConnectionSettings::default(),
            max_results: DEFAULT_MAX_RESULTS,
            filter: FilterLimits::default(),
        }
    }
}

impl Default for ParsedConfiguration {
    fn default() -> Self {
        Self::empty()
    }
}

fn version_default() -> u32 {
    CURRENT_VERSION
}

fn max_results_default() -> u32 {
    DEFAULT_MAX_RESULTS
}

/// Read a configuration file. `path` may be the file itself or the directory containing
/// `configuration.json`.
pub async fn parse_configuration(
    path: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let path = path.as_ref();
    let file_path = if fs::metadata(path).await?.is_dir() {
        path.join(CONFIGURATION_FILENAME)
    } else {
        path.to_path_buf()
    };

    let contents = fs::read_to_string(&file_path).await?;
    let parsed: ParsedConfiguration =
        serde_json::from_str(&contents).map_err(|error| ParseConfigurationError::ParseError {
            file_path: file_path.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion(parsed.version));
    }

    tracing::debug!(file = %file_path.display(), "read configuration file");
    Ok(parsed)
}

/// The JSON schema of the configuration file.
pub fn configuration_jsonschema() -> RootSchema {
    SchemaSettings::draft07()
        .into_generator()
        .into_root_schema_for::<ParsedConfiguration>()
}
