//! A binary search over time domain.

#[cfg(test)]
#[path = "../../tests/unit/solver/search_test.rs"]
mod search_test;

use crate::models::{Problem, Time, repair_duration};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Specifies how the upper bound of the search range is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchBound {
    /// The time needed by the slowest worker to repair all cars alone: `max(rank) * cars^2`,
    /// saturated to `Time::MAX` when it does not fit into the time domain.
    #[default]
    Derived,
    /// A fixed upper bound. The search fails if there is no feasible time below it.
    Fixed(Time),
}

impl SearchBound {
    /// A fixed ceiling which is large enough for ranks and cars up to `10^5`.
    pub const REFERENCE_CEILING: Time = 1_000_000_000_000_000;

    /// Returns a fixed bound with `REFERENCE_CEILING` value.
    pub fn reference() -> Self {
        Self::Fixed(Self::REFERENCE_CEILING)
    }

    /// Returns upper bound of the search range for the given problem.
    pub fn upper_bound(&self, problem: &Problem) -> Time {
        match self {
            SearchBound::Derived => repair_duration(problem.max_rank(), problem.cars()).unwrap_or(Time::MAX),
            SearchBound::Fixed(value) => *value,
        }
    }
}

impl Display for SearchBound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchBound::Derived => write!(f, "derived"),
            SearchBound::Fixed(value) => write!(f, "fixed({value})"),
        }
    }
}

/// Returns the minimal time within the range for which the predicate holds together with the
/// amount of predicate evaluations. The predicate must be monotonic: once it holds for some time,
/// it holds for any later time.
pub fn find_minimal_time<F>(range: RangeInclusive<Time>, is_feasible: F) -> (Option<Time>, usize)
where
    F: Fn(Time) -> bool,
{
    let (mut low, mut high) = range.into_inner();
    let mut best = None;
    let mut iterations = 0;

    while low <= high {
        let mid = low + (high - low) / 2;
        iterations += 1;

        if is_feasible(mid) {
            best = Some(mid);
            match mid.checked_sub(1) {
                Some(value) => high = value,
                None => break,
            }
        } else {
            match mid.checked_add(1) {
                Some(value) => low = value,
                None => break,
            }
        }
    }

    (best, iterations)
}
