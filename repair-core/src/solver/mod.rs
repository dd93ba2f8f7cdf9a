//! This module contains the solver which finds the minimal repair time.
//!
//! The solver runs a binary search over time using a capacity predicate: for a candidate time it
//! checks whether the fleet repairs enough cars. Capacity is non-decreasing in time, so the first
//! feasible time found by the search is the minimal one.
//!
//! # Examples
//!
//! ```
//! # use repair_core::prelude::*;
//! # use std::sync::Arc;
//! let problem = Arc::new(Problem::new(&[4, 2, 3, 1], 10)?);
//!
//! let (solution, metrics) = Solver::new(problem)
//!     .with_capacity(CapacityType::Workers)
//!     .with_bound(SearchBound::reference())
//!     .with_telemetry(Telemetry::new(TelemetryMode::OnlyMetrics))
//!     .solve()?;
//!
//! assert_eq!(solution.time, 16);
//! assert_eq!(solution.total_cars(), 10);
//! assert!(metrics.is_some());
//! # Ok::<(), GenericError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod capacity;
pub use self::capacity::{Capacity, CapacityType, GroupedCapacity, WorkerCapacity};

mod check;
pub use self::check::{TimeCheck, check_time};

mod search;
pub use self::search::{SearchBound, find_minimal_time};

mod telemetry;
pub use self::telemetry::{InfoLogger, Metrics, Telemetry, TelemetryMode};

use crate::models::{Problem, Solution};
use crate::utils::{GenericError, GenericResult, Timer};
use std::sync::Arc;

/// Finds the minimal time needed to repair all cars of the problem.
pub struct Solver {
    problem: Arc<Problem>,
    capacity: CapacityType,
    bound: SearchBound,
    telemetry: Telemetry,
}

impl Solver {
    /// Creates a new instance of `Solver` with default settings: grouped capacity, derived search
    /// bound and no telemetry.
    pub fn new(problem: Arc<Problem>) -> Self {
        Self {
            problem,
            capacity: CapacityType::default(),
            bound: SearchBound::default(),
            telemetry: Telemetry::default(),
        }
    }

    /// Sets capacity implementation.
    /// Default is grouped.
    pub fn with_capacity(mut self, capacity: CapacityType) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets upper bound strategy of the search range.
    /// Default is derived from the problem.
    pub fn with_bound(mut self, bound: SearchBound) -> Self {
        self.bound = bound;
        self
    }

    /// Sets telemetry.
    /// Default is none.
    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Solves the problem returning the solution and search metrics if telemetry collects them.
    pub fn solve(self) -> GenericResult<(Solution, Option<Metrics>)> {
        let upper_bound = self.bound.upper_bound(self.problem.as_ref());
        let cars = self.problem.cars();

        self.telemetry.log(&format!(
            "configured to use {} capacity and {} bound, searching time in [0, {upper_bound}] \
             for {} workers and {cars} cars",
            self.capacity,
            self.bound,
            self.problem.ranks().len()
        ));

        let capacity = self.capacity.create(self.problem.as_ref());
        let ((time, iterations), duration) = Timer::measure_duration(|| {
            find_minimal_time(0..=upper_bound, |time| capacity.is_sufficient(time, cars))
        });

        let time = time.ok_or_else(|| {
            GenericError::from(format!(
                "cannot find feasible time within [0, {upper_bound}]: \
                 {cars} cars cannot be repaired, search bound is too small"
            ))
        })?;

        let metrics = self.telemetry.on_result(time, iterations, (0, upper_bound), duration);

        Ok((Solution::new(self.problem.as_ref(), time), metrics))
    }
}
