use crate::models::Problem;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::Arc;

pub fn create_problem(ranks: &[i64], cars: i64) -> Arc<Problem> {
    Arc::new(Problem::new(ranks, cars).expect("cannot create problem"))
}

/// Creates a random problem with ranks in `[1, max_rank]`.
pub fn create_random_problem(rng: &mut SmallRng, max_workers: usize, max_rank: i64, max_cars: i64) -> Arc<Problem> {
    let workers = rng.gen_range(1..=max_workers);
    let ranks = (0..workers).map(|_| rng.gen_range(1..=max_rank)).collect::<Vec<_>>();
    let cars = rng.gen_range(1..=max_cars);

    create_problem(ranks.as_slice(), cars)
}

pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
