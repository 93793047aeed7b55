//! Metrics setup and update for the query engine.

use prometheus::{Histogram, HistogramTimer, IntCounter};

/// The collection of all metrics exposed through the `/metrics` endpoint.
#[derive(Debug, Clone)]
pub struct Metrics {
    query_total: IntCounter,
    validation_errors_total: IntCounter,
    database_errors_total: IntCounter,
    query_execution_seconds: Histogram,
}

impl Metrics {
    /// Set up counters and histograms and register them with the given registry.
    pub fn initialize(metrics_registry: &mut prometheus::Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "pgrest_query_total",
            "Total successful queries.",
        )?;

        let validation_errors_total = add_int_counter_metric(
            metrics_registry,
            "pgrest_query_validation_errors_total",
            "Total queries rejected because the request was invalid.",
        )?;

        let database_errors_total = add_int_counter_metric(
            metrics_registry,
            "pgrest_query_database_errors_total",
            "Total queries that failed in the database.",
        )?;

        let query_execution_seconds = add_histogram_metric(
            metrics_registry,
            "pgrest_query_execution_seconds",
            "Time taken to execute a query against the database, in seconds.",
        )?;

        Ok(Self {
            query_total,
            validation_errors_total,
            database_errors_total,
            query_execution_seconds,
        })
    }

    pub fn record_successful_query(&self) {
        self.query_total.inc();
    }

    pub fn record_validation_error(&self) {
        self.validation_errors_total.inc();
    }

    pub fn record_database_error(&self) {
        self.database_errors_total.inc();
    }

    /// Observe the execution time when the returned timer is dropped.
    pub fn time_query_execution(&self) -> HistogramTimer {
        self.query_execution_seconds.start_timer()
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter =
        IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}

/// Create a new histogram metric and register it with the provided Prometheus Registry
fn add_histogram_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<Histogram, prometheus::Error> {
    let histogram = Histogram::with_opts(prometheus::HistogramOpts::new(
        metric_name,
        metric_description,
    ))?;
    metrics_registry.register(Box::new(histogram.clone()))?;
    Ok(histogram)
}
