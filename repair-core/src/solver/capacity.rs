//! Provides the way to evaluate how many cars the whole fleet repairs within given time.

#[cfg(test)]
#[path = "../../tests/unit/solver/capacity_test.rs"]
mod capacity_test;

use crate::models::{Problem, Rank, Time, repairable};
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};
use std::ops::ControlFlow;

/// Evaluates repair capacity of a fleet. Implementations must be non-decreasing in time.
pub trait Capacity {
    /// Returns total amount of cars repaired by all workers within given time.
    fn repairable(&self, time: Time) -> u64;

    /// Returns true if workers repair at least `required` cars within given time.
    /// Stops as soon as the required amount is reached.
    fn is_sufficient(&self, time: Time, required: u64) -> bool;
}

/// Specifies which capacity implementation is used by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapacityType {
    /// Evaluates every worker in the original order.
    Workers,
    /// Evaluates workers with equal ranks at once.
    #[default]
    Grouped,
}

impl CapacityType {
    /// Creates a capacity implementation for the problem.
    pub fn create<'a>(&self, problem: &'a Problem) -> Box<dyn Capacity + 'a> {
        match self {
            CapacityType::Workers => Box::new(WorkerCapacity::new(problem)),
            CapacityType::Grouped => Box::new(GroupedCapacity::new(problem)),
        }
    }
}

impl Display for CapacityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityType::Workers => write!(f, "workers"),
            CapacityType::Grouped => write!(f, "grouped"),
        }
    }
}

/// A capacity which visits workers one by one keeping a running deficit of cars.
pub struct WorkerCapacity<'a> {
    ranks: &'a [Rank],
}

impl<'a> WorkerCapacity<'a> {
    /// Creates a new instance of `WorkerCapacity`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { ranks: problem.ranks() }
    }
}

impl Capacity for WorkerCapacity<'_> {
    fn repairable(&self, time: Time) -> u64 {
        self.ranks.iter().map(|&rank| repairable(rank, time)).fold(0, u64::saturating_add)
    }

    fn is_sufficient(&self, time: Time, required: u64) -> bool {
        required == 0
            || self
                .ranks
                .iter()
                .try_fold(required, |deficit, &rank| match deficit.saturating_sub(repairable(rank, time)) {
                    0 => ControlFlow::Break(()),
                    deficit => ControlFlow::Continue(deficit),
                })
                .is_break()
    }
}

/// A capacity which groups workers by rank: each distinct rank is evaluated once and multiplied by
/// the amount of workers sharing it. Groups are sorted from the fastest to the slowest.
pub struct GroupedCapacity {
    groups: Vec<(Rank, u64)>,
}

impl GroupedCapacity {
    /// Creates a new instance of `GroupedCapacity`.
    pub fn new(problem: &Problem) -> Self {
        let mut groups = problem
            .ranks()
            .iter()
            .fold(FxHashMap::<Rank, u64>::default(), |mut acc, &rank| {
                *acc.entry(rank).or_insert(0) += 1;
                acc
            })
            .into_iter()
            .collect::<Vec<_>>();

        groups.sort_unstable_by_key(|&(rank, _)| rank);

        Self { groups }
    }

    /// Returns distinct ranks with amount of workers having them.
    pub fn groups(&self) -> &[(Rank, u64)] {
        self.groups.as_slice()
    }
}

impl Capacity for GroupedCapacity {
    fn repairable(&self, time: Time) -> u64 {
        self.groups
            .iter()
            .map(|&(rank, count)| repairable(rank, time).saturating_mul(count))
            .fold(0, u64::saturating_add)
    }

    fn is_sufficient(&self, time: Time, required: u64) -> bool {
        if required == 0 {
            return true;
        }

        let mut deficit = required;
        for &(rank, count) in self.groups.iter() {
            let cars = repairable(rank, time);
            // slower groups cannot repair anything either
            if cars == 0 {
                return false;
            }

            deficit = deficit.saturating_sub(cars.saturating_mul(count));
            if deficit == 0 {
                return true;
            }
        }

        false
    }
}
