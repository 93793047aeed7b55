use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::{Environment, Variable};

/// A value that is either written into the configuration or read from the environment
/// when the runtime configuration is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    #[serde(rename_all = "camelCase")]
    FromEnvironment { variable: Variable },
}

impl Secret {
    /// Resolve the secret to its value.
    pub fn resolve(&self, environment: &impl Environment) -> Result<String, crate::environment::Error> {
        match self {
            Secret::Plain(value) => Ok(value.clone()),
            Secret::FromEnvironment { variable } => environment.read(variable),
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
