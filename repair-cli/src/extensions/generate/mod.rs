//! Generate command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use crate::format::ProblemDefinition;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Generates a problem with given amount of workers and cars. Ranks are uniformly distributed
/// in `[1, max_rank]`. The same seed produces the same problem.
pub fn generate_problem(
    workers: usize,
    cars: i64,
    max_rank: i64,
    seed: Option<u64>,
) -> Result<ProblemDefinition, String> {
    if workers == 0 {
        return Err("amount of workers should be positive".to_string());
    }

    if cars <= 0 {
        return Err(format!("amount of cars should be positive, got '{cars}'"));
    }

    if max_rank <= 0 {
        return Err(format!("max rank should be positive, got '{max_rank}'"));
    }

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let ranks = (0..workers).map(|_| rng.gen_range(1..=max_rank)).collect();

    Ok(ProblemDefinition { ranks, cars })
}
