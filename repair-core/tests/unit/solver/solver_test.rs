use super::*;
use crate::helpers::models::{create_problem, create_random_problem, create_rng};
use crate::repair_cars;
use rand::Rng;
use std::sync::Mutex;

parameterized_test! {can_find_minimal_repair_time, (ranks, cars, expected), {
    assert_eq!(repair_cars(ranks.as_slice(), cars), Ok(expected));
}}

can_find_minimal_repair_time! {
    case_01_single_worker: (vec![1], 1, 1),
    case_02_reference_example: (vec![4, 2, 3, 1], 10, 16),
    case_03_second_reference_example: (vec![5, 1, 8], 6, 16),
    case_04_single_slow_worker: (vec![100], 10, 10_000),
    case_05_equal_workers: (vec![3, 3, 3], 6, 12),
    case_06_contest_limits: (vec![100_000], 100_000, 1_000_000_000_000_000),
    case_07_slowest_rank_overflows_bound: (vec![i64::MAX, 1], 2, 4),
    case_08_slow_workers_at_huge_times: (vec![i64::MAX, i64::MAX], 1, i64::MAX as u64),
}

#[test]
fn can_reject_invalid_input() {
    assert!(repair_cars(&[], 1).is_err());
    assert!(repair_cars(&[1], 0).is_err());
    assert!(repair_cars(&[1, -2], 1).is_err());
}

parameterized_test! {can_solve_with_all_settings, (capacity, bound), {
    let problem = create_problem(&[4, 2, 3, 1], 10);

    let (solution, metrics) = Solver::new(problem).with_capacity(capacity).with_bound(bound).solve().unwrap();

    assert_eq!(solution.time, 16);
    assert_eq!(solution.total_cars(), 10);
    assert!(metrics.is_none());
}}

can_solve_with_all_settings! {
    case_01_workers_derived: (CapacityType::Workers, SearchBound::Derived),
    case_02_grouped_derived: (CapacityType::Grouped, SearchBound::Derived),
    case_03_workers_reference: (CapacityType::Workers, SearchBound::reference()),
    case_04_grouped_reference: (CapacityType::Grouped, SearchBound::reference()),
    case_05_tight_fixed: (CapacityType::Grouped, SearchBound::Fixed(16)),
}

#[test]
fn can_fail_when_fixed_bound_is_too_small() {
    let problem = create_problem(&[4, 2, 3, 1], 10);

    let result = Solver::new(problem).with_bound(SearchBound::Fixed(15)).solve().map(|(solution, _)| solution.time);

    assert_eq!(
        result,
        Err("cannot find feasible time within [0, 15]: 10 cars cannot be repaired, search bound is too small".into())
    );
}

#[test]
fn can_fail_when_cars_cannot_be_repaired_within_time_domain() {
    let problem = create_problem(&[i64::MAX], 2);

    let result = Solver::new(problem).solve().map(|(solution, _)| solution.time);

    assert_eq!(
        result,
        Err(format!(
            "cannot find feasible time within [0, {}]: 2 cars cannot be repaired, search bound is too small",
            u64::MAX
        )
        .into())
    );
}

#[test]
fn can_collect_metrics_and_log() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let problem = create_problem(&[5, 1, 8], 6);

    let (solution, metrics) =
        Solver::new(problem).with_telemetry(Telemetry::new(TelemetryMode::All { logger })).solve().unwrap();

    let metrics = metrics.expect("metrics should be collected");
    assert_eq!(solution.time, 16);
    assert_eq!(metrics.lower_bound, 0);
    assert_eq!(metrics.upper_bound, 8 * 6 * 6);
    assert!(metrics.iterations > 0);
    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0],
        "configured to use grouped capacity and derived bound, searching time in [0, 288] for 3 workers and 6 cars"
    );
    assert!(messages[1].starts_with("found minimal time 16 after"));
}

#[test]
fn can_return_minimal_time_on_random_problems() {
    let mut rng = create_rng(42);

    for _ in 0..200 {
        let problem = create_random_problem(&mut rng, 15, 100, 300);
        let cars = problem.cars();

        let (solution, _) = Solver::new(problem.clone()).solve().unwrap();
        for bound in [SearchBound::reference(), SearchBound::Fixed(solution.time), SearchBound::Fixed(u64::MAX)] {
            let (other, _) = Solver::new(problem.clone()).with_bound(bound).solve().unwrap();
            assert_eq!(other.time, solution.time, "bound: {bound}");
        }

        let capacity = WorkerCapacity::new(problem.as_ref());
        assert!(capacity.is_sufficient(solution.time, cars));
        assert!(solution.time > 0);
        assert!(!capacity.is_sufficient(solution.time - 1, cars));
        assert_eq!(check_time(problem.as_ref(), solution.time), TimeCheck::Minimal);
        assert_eq!(solution.total_cars(), cars);
        assert!(solution.assignments.iter().all(|assignment| assignment.finish <= solution.time));
    }
}

#[test]
fn can_scale_time_with_ranks() {
    let mut rng = create_rng(3);

    for _ in 0..100 {
        let ranks = (0..rng.gen_range(1..10)).map(|_| rng.gen_range(1..50)).collect::<Vec<i64>>();
        let cars = rng.gen_range(1..100);
        let factor = rng.gen_range(2..10);
        let scaled = ranks.iter().map(|rank| rank * factor).collect::<Vec<_>>();

        let original = repair_cars(ranks.as_slice(), cars).unwrap();
        let scaled = repair_cars(scaled.as_slice(), cars).unwrap();

        assert_eq!(scaled, original * factor as u64, "ranks: {ranks:?}, cars: {cars}, factor: {factor}");
    }
}

#[test]
fn can_return_same_result_on_repeated_calls() {
    let problem = create_problem(&[7, 3, 3, 9, 1, 4], 57);

    let first = Solver::new(problem.clone()).solve().unwrap();
    let second = Solver::new(problem).solve().unwrap();

    assert_eq!(first, second);
}
