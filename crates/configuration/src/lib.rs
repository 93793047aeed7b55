pub mod configuration;
pub mod connection_settings;
pub mod environment;
pub mod error;
pub mod to_runtime_configuration;
pub mod values;
pub mod version1;

pub use configuration::Configuration;
pub use connection_settings::{ConnectionParameters, DatabaseConnectionSettings};
pub use error::{ConfigurationError, MakeRuntimeConfigurationError, ParseConfigurationError};
pub use to_runtime_configuration::make_runtime_configuration;
pub use values::{FilterLimits, Secret};
pub use version1::{configuration_jsonschema, parse_configuration, ParsedConfiguration};
