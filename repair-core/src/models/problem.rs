#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use super::Rank;
use crate::utils::{GenericError, GenericResult};

/// Defines a problem: a fleet of workers, represented by their ranks, has to repair given amount
/// of cars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    ranks: Vec<Rank>,
    cars: u64,
}

impl Problem {
    /// Creates a new problem validating its input: ranks should not be empty, each rank and the
    /// amount of cars should be positive. All violations are reported within one error.
    pub fn new(ranks: &[i64], cars: i64) -> GenericResult<Self> {
        let mut errors = Vec::<GenericError>::new();

        if ranks.is_empty() {
            errors.push("ranks should not be empty".into());
        }

        if let Some((idx, rank)) = ranks.iter().enumerate().find(|(_, rank)| **rank <= 0) {
            let total = ranks.iter().filter(|rank| **rank <= 0).count();
            errors.push(format!("ranks should be positive: {total} invalid, first is '{rank}' at index {idx}").into());
        }

        if cars <= 0 {
            errors.push(format!("amount of cars should be positive, got '{cars}'").into());
        }

        if !errors.is_empty() {
            return Err(GenericError::join_many(errors, ", "));
        }

        Ok(Self { ranks: ranks.iter().map(|&rank| rank as Rank).collect(), cars: cars as u64 })
    }

    /// Returns workers' ranks in their original order.
    pub fn ranks(&self) -> &[Rank] {
        self.ranks.as_slice()
    }

    /// Returns amount of cars to be repaired.
    pub fn cars(&self) -> u64 {
        self.cars
    }

    /// Returns the rank of the slowest worker.
    pub fn max_rank(&self) -> Rank {
        self.ranks.iter().copied().max().unwrap_or_default()
    }
}
