//! A collection of models to represent the problem and its solution.

#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

mod problem;
pub use self::problem::Problem;

mod solution;
pub use self::solution::{Assignment, Solution};

/// A worker's repair speed coefficient: the lower the rank, the faster the worker.
pub type Rank = u64;

/// Elapsed time units.
pub type Time = u64;

/// Returns amount of cars a worker with given rank repairs within given time.
///
/// NOTE: time is divided by rank using integer division before the square root is taken. The result
/// equals the floor of the root of the exact quotient: `k^2 <= t / r` holds iff `k^2 <= floor(t / r)`.
#[inline]
pub fn repairable(rank: Rank, time: Time) -> u64 {
    (time / rank).isqrt()
}

/// Returns time needed by a worker with given rank to repair given amount of cars or `None` if it
/// doesn't fit into `Time`.
#[inline]
pub fn repair_duration(rank: Rank, cars: u64) -> Option<Time> {
    cars.checked_mul(cars).and_then(|squared| squared.checked_mul(rank))
}
