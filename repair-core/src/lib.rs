//! Core crate contains building blocks to find the minimum time needed by a fleet of workers to
//! repair a given amount of cars.
//!
//! A worker with rank `r` repairs `n` cars in `r * n^2` time units, so within time `t` it manages
//! `floor(sqrt(t / r))` cars. The total capacity of the fleet is non-decreasing in time, which makes
//! the minimal time discoverable with a binary search.
//!
//! # Examples
//!
//! ```
//! use repair_core::repair_cars;
//!
//! assert_eq!(repair_cars(&[4, 2, 3, 1], 10).unwrap(), 16);
//! assert_eq!(repair_cars(&[5, 1, 8], 6).unwrap(), 16);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;

use crate::models::{Problem, Time};
use crate::solver::Solver;
use crate::utils::GenericResult;
use std::sync::Arc;

/// Returns the minimum time needed to repair `cars` cars by workers with given `ranks`.
///
/// Fails when ranks are empty, or any rank or the car count is not positive.
pub fn repair_cars(ranks: &[i64], cars: i64) -> GenericResult<Time> {
    let problem = Arc::new(Problem::new(ranks, cars)?);

    Solver::new(problem).solve().map(|(solution, _)| solution.time)
}
