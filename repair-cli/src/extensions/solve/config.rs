//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use repair_core::models::{Problem, Time};
use repair_core::solver::{CapacityType, InfoLogger, SearchBound, Solver, Telemetry, TelemetryMode};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A solver configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies capacity evaluation type.
    pub capacity: Option<CapacityConfig>,
    /// Specifies upper bound of the search range.
    pub bound: Option<BoundConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A capacity evaluation configuration.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CapacityConfig {
    /// Evaluates workers one by one.
    #[serde(rename(deserialize = "workers"))]
    Workers,
    /// Evaluates workers grouped by rank.
    #[serde(rename(deserialize = "grouped"))]
    Grouped,
}

/// A search bound configuration.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum BoundConfig {
    /// The bound is derived from the problem.
    #[serde(rename(deserialize = "derived"))]
    Derived,
    /// A fixed bound.
    #[serde(rename(deserialize = "fixed"))]
    Fixed {
        /// Bound value.
        value: Time,
    },
    /// A fixed bound which fits ranks and cars up to `10^5`.
    #[serde(rename(deserialize = "reference"))]
    Reference,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging. Disabled by default.
    pub logging: Option<LoggingConfig>,
    /// Specifies metrics collection. Enabled by default.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    /// True if logging is enabled.
    pub enabled: bool,
}

/// A metrics configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct MetricsConfig {
    /// True if metrics are collected.
    pub enabled: bool,
}

impl Config {
    /// Turns logging on or off keeping other settings.
    pub fn set_logging(&mut self, enabled: bool) {
        self.telemetry.get_or_insert_with(Default::default).logging = Some(LoggingConfig { enabled });
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a solver from config file.
pub fn create_solver_from_config_file<R: Read>(
    problem: Arc<Problem>,
    reader: BufReader<R>,
    logger: InfoLogger,
) -> Result<Solver, String> {
    read_config(reader).map(|config| create_solver_from_config(problem, &config, logger))
}

/// Creates a solver from config.
pub fn create_solver_from_config(problem: Arc<Problem>, config: &Config, logger: InfoLogger) -> Solver {
    let capacity = match config.capacity {
        Some(CapacityConfig::Workers) => CapacityType::Workers,
        Some(CapacityConfig::Grouped) | None => CapacityType::Grouped,
    };

    let bound = match config.bound {
        Some(BoundConfig::Fixed { value }) => SearchBound::Fixed(value),
        Some(BoundConfig::Reference) => SearchBound::reference(),
        Some(BoundConfig::Derived) | None => SearchBound::Derived,
    };

    let telemetry = config.telemetry.as_ref();
    let logging = telemetry.and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled);
    let metrics = telemetry.and_then(|telemetry| telemetry.metrics.as_ref()).is_none_or(|metrics| metrics.enabled);

    let mode = match (logging, metrics) {
        (true, true) => TelemetryMode::All { logger },
        (true, false) => TelemetryMode::OnlyLogging { logger },
        (false, true) => TelemetryMode::OnlyMetrics,
        (false, false) => TelemetryMode::None,
    };

    Solver::new(problem).with_capacity(capacity).with_bound(bound).with_telemetry(Telemetry::new(mode))
}
