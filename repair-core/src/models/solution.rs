#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use super::*;

/// Specifies how many cars are given to a specific worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Worker index in the problem's rank list.
    pub worker: usize,
    /// Worker's rank.
    pub rank: Rank,
    /// Amount of cars repaired by the worker.
    pub cars: u64,
    /// Time when the worker finishes repairing its cars.
    pub finish: Time,
}

/// A problem's solution: the minimal time and a schedule which fits into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Minimal time needed to repair all cars.
    pub time: Time,
    /// Cars distributed among workers, ordered by worker index. Idle workers are omitted.
    pub assignments: Vec<Assignment>,
}

impl Solution {
    /// Creates a solution distributing problem's cars among workers within given time.
    /// Faster workers are loaded first, ties are resolved by worker index.
    pub(crate) fn new(problem: &Problem, time: Time) -> Self {
        let mut workers = problem.ranks().iter().copied().enumerate().collect::<Vec<_>>();
        workers.sort_by_key(|&(worker, rank)| (rank, worker));

        let mut remaining = problem.cars();
        let mut assignments = workers
            .into_iter()
            .map_while(|(worker, rank)| {
                if remaining == 0 {
                    return None;
                }

                let cars = repairable(rank, time).min(remaining);
                remaining -= cars;

                Some(Assignment { worker, rank, cars, finish: rank * cars * cars })
            })
            .filter(|assignment| assignment.cars > 0)
            .collect::<Vec<_>>();

        assignments.sort_by_key(|assignment| assignment.worker);

        Self { time, assignments }
    }

    /// Returns total amount of cars repaired.
    pub fn total_cars(&self) -> u64 {
        self.assignments.iter().map(|assignment| assignment.cars).sum()
    }
}
