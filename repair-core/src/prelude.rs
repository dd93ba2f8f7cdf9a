//! This module reimports commonly used types.

pub use crate::models::{Assignment, Problem, Rank, Solution, Time};
pub use crate::solver::{
    CapacityType, InfoLogger, Metrics, SearchBound, Solver, Telemetry, TelemetryMode, TimeCheck, check_time,
};
pub use crate::utils::{GenericError, GenericResult};

pub use crate::repair_cars;
