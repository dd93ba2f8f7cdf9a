#[cfg(test)]
#[path = "../../tests/unit/solver/check_test.rs"]
mod check_test;

use super::capacity::{Capacity, GroupedCapacity};
use super::search::find_minimal_time;
use crate::models::{Problem, Time};

/// A result of checking a time against the problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeCheck {
    /// All cars are repaired within the time, but not within any smaller one.
    Minimal,
    /// All cars are repaired within the time, but a smaller one is enough.
    NotMinimal {
        /// The minimal time.
        minimal: Time,
    },
    /// Workers cannot repair all cars within the time.
    Infeasible {
        /// Amount of cars repaired within the time.
        capacity: u64,
    },
}

/// Checks whether given time is the minimal time needed to repair all problem's cars.
pub fn check_time(problem: &Problem, time: Time) -> TimeCheck {
    let capacity = GroupedCapacity::new(problem);
    let cars = problem.cars();

    if !capacity.is_sufficient(time, cars) {
        return TimeCheck::Infeasible { capacity: capacity.repairable(time) };
    }

    match find_minimal_time(0..=time, |time| capacity.is_sufficient(time, cars)) {
        (Some(minimal), _) if minimal < time => TimeCheck::NotMinimal { minimal },
        _ => TimeCheck::Minimal,
    }
}
