use super::*;
use crate::helpers::models::create_problem;

parameterized_test! {can_find_minimal_time_for_threshold, (threshold, range, expected), {
    let (time, _) = find_minimal_time(range, |time| time >= threshold);

    assert_eq!(time, expected);
}}

can_find_minimal_time_for_threshold! {
    case_01_in_middle: (42, 0..=100, Some(42)),
    case_02_at_lower_bound: (0, 0..=100, Some(0)),
    case_03_at_upper_bound: (100, 0..=100, Some(100)),
    case_04_above_upper_bound: (101, 0..=100, None),
    case_05_single_point_feasible: (5, 5..=5, Some(5)),
    case_06_single_point_infeasible: (6, 5..=5, None),
    case_07_empty_range: (0, 10..=5, None),
    case_08_full_domain: (u64::MAX, 0..=u64::MAX, Some(u64::MAX)),
    case_09_full_domain_low: (1, 0..=u64::MAX, Some(1)),
}

#[test]
fn can_count_iterations_logarithmically() {
    let (time, iterations) = find_minimal_time(0..=1_000_000, |time| time >= 777_777);

    assert_eq!(time, Some(777_777));
    assert!(iterations <= 21, "too many iterations: {iterations}");
}

parameterized_test! {can_get_upper_bound, (ranks, cars, bound, expected), {
    let problem = create_problem(ranks.as_slice(), cars);

    assert_eq!(bound.upper_bound(problem.as_ref()), expected);
}}

can_get_upper_bound! {
    case_01_derived_from_slowest: (vec![4, 2, 3, 1], 10, SearchBound::Derived, 400),
    case_02_derived_single: (vec![1], 1, SearchBound::Derived, 1),
    case_03_fixed: (vec![4, 2, 3, 1], 10, SearchBound::Fixed(20), 20),
    case_04_reference: (vec![1], 1, SearchBound::reference(), 1_000_000_000_000_000),
    case_05_derived_saturated: (vec![i64::MAX], i64::MAX, SearchBound::Derived, u64::MAX),
    case_06_derived_saturated_by_slowest: (vec![i64::MAX, 1], 2, SearchBound::Derived, u64::MAX),
}

#[test]
fn can_display_bound() {
    assert_eq!(SearchBound::Derived.to_string(), "derived");
    assert_eq!(SearchBound::Fixed(10).to_string(), "fixed(10)");
}
