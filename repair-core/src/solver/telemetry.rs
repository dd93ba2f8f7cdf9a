//! A module which provides the logic to collect metrics about search execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::Time;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Encapsulates different measurements regarding search evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metrics {
    /// Search duration in milliseconds.
    pub duration: usize,
    /// Amount of capacity evaluations.
    pub iterations: usize,
    /// Lower bound of the searched time range.
    pub lower_bound: Time,
    /// Upper bound of the searched time range.
    pub upper_bound: Time,
}

/// Specifies a telemetry mode.
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
    },
    /// Only metrics collection.
    OnlyMetrics,
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
    },
}

/// Provides the way to get some meta information about the search.
pub struct Telemetry {
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode }
    }

    /// Writes message into the logger if logging is enabled.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger } | TelemetryMode::All { logger } => logger.deref()(message),
            _ => {}
        }
    }

    /// Reports search outcome returning metrics if they are collected.
    pub(crate) fn on_result(
        &self,
        time: Time,
        iterations: usize,
        bounds: (Time, Time),
        duration: Duration,
    ) -> Option<Metrics> {
        let duration = duration.as_millis() as usize;
        self.log(&format!("found minimal time {time} after {iterations} iterations, took {duration}ms"));

        match &self.mode {
            TelemetryMode::OnlyMetrics | TelemetryMode::All { .. } => {
                Some(Metrics { duration, iterations, lower_bound: bounds.0, upper_bound: bounds.1 })
            }
            _ => None,
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new(TelemetryMode::None)
    }
}
