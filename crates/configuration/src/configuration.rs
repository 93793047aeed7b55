//! Configuration for the service.

use crate::connection_settings::ConnectionParameters;
use crate::values::FilterLimits;

/// The 'Configuration' type collects all the information necessary to serve queries at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves secrets and applies environment overrides.
/// It is read-only once the server has started.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub connection: ConnectionParameters,
    /// server side cap on the number of rows a single query may return
    pub max_results: u32,
    pub filter_limits: FilterLimits,
}
