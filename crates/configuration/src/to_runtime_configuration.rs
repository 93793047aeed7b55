//! Convert a parsed configuration into the runtime configuration, resolving secrets and
//! applying overrides from the environment.

use crate::configuration::Configuration;
use crate::connection_settings::ConnectionParameters;
use crate::environment::{Environment, Variable};
use crate::error::MakeRuntimeConfigurationError;
use crate::version1::ParsedConfiguration;

pub const HOST_VARIABLE: &str = "PGREST_DB_HOST";
pub const PORT_VARIABLE: &str = "PGREST_DB_PORT";
pub const DBNAME_VARIABLE: &str = "PGREST_DB_NAME";
pub const USER_VARIABLE: &str = "PGREST_DB_USER";
pub const PASSWORD_VARIABLE: &str = "PGREST_DB_PASSWORD";
pub const MAX_RESULTS_VARIABLE: &str = "PGREST_MAX_RESULTS";

/// Build the runtime configuration. Environment variables take precedence over the file.
pub fn make_runtime_configuration(
    parsed: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let settings = parsed.connection_settings;

    let host = override_or(&environment, HOST_VARIABLE, || settings.host.resolve(&environment))?;
    let dbname = override_or(&environment, DBNAME_VARIABLE, || {
        settings.dbname.resolve(&environment)
    })?;
    let user = override_or(&environment, USER_VARIABLE, || settings.user.resolve(&environment))?;
    let password = override_or(&environment, PASSWORD_VARIABLE, || {
        settings.password.resolve(&environment)
    })?;
    let port = parse_override(&environment, PORT_VARIABLE)?.unwrap_or(settings.port);
    let max_results = parse_override(&environment, MAX_RESULTS_VARIABLE)?.unwrap_or(parsed.max_results);

    Ok(Configuration {
        connection: ConnectionParameters {
            host,
            port,
            dbname,
            user,
            password,
        },
        max_results,
        filter_limits: parsed.filter,
    })
}

fn override_or(
    environment: &impl Environment,
    variable: &'static str,
    fallback: impl FnOnce() -> Result<String, crate::environment::Error>,
) -> Result<String, MakeRuntimeConfigurationError> {
    match environment.read_optional(&Variable::from_static(variable))? {
        Some(value) => Ok(value),
        None => Ok(fallback()?),
    }
}

fn parse_override<T>(
    environment: &impl Environment,
    variable: &'static str,
) -> Result<Option<T>, MakeRuntimeConfigurationError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let variable = Variable::from_static(variable);
    match environment.read_optional(&variable)? {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|err: T::Err| {
            MakeRuntimeConfigurationError::InvalidEnvironmentValue {
                variable,
                message: err.to_string(),
                value,
            }
        }),
    }
}
