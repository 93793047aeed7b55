//! Database connection settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::values::Secret;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DBNAME: &str = "postgres";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "postgres";

/// Database connection settings, as written in the configuration file.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    /// Host name or IP address of the PostgreSQL server.
    #[serde(default = "host_default")]
    pub host: Secret,
    /// Port of the PostgreSQL server.
    #[serde(default = "port_default")]
    pub port: u16,
    /// Name of the database to connect to.
    #[serde(default = "dbname_default")]
    pub dbname: Secret,
    /// User to connect as.
    #[serde(default = "user_default")]
    pub user: Secret,
    /// Password of the user.
    #[serde(default = "password_default")]
    pub password: Secret,
}

impl Default for DatabaseConnectionSettings {
    fn default() -> Self {
        Self {
            host: host_default(),
            port: port_default(),
            dbname: dbname_default(),
            user: user_default(),
            password: password_default(),
        }
    }
}

fn host_default() -> Secret {
    DEFAULT_HOST.into()
}

fn port_default() -> u16 {
    DEFAULT_PORT
}

fn dbname_default() -> Secret {
    DEFAULT_DBNAME.into()
}

fn user_default() -> Secret {
    DEFAULT_USER.into()
}

fn password_default() -> Secret {
    DEFAULT_PASSWORD.into()
}

/// The resolved parameters used to open a connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl ConnectionParameters {
    /// Check that every parameter needed to open a connection is present.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.host.is_empty() {
            return Err(ConfigurationError::MissingParameter("host"));
        }
        if self.port == 0 {
            return Err(ConfigurationError::MissingParameter("port"));
        }
        if self.dbname.is_empty() {
            return Err(ConfigurationError::MissingParameter("dbname"));
        }
        if self.user.is_empty() {
            return Err(ConfigurationError::MissingParameter("user"));
        }
        Ok(())
    }
}

// the password never ends up in logs
impl std::fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
