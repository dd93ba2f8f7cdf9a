//! Check command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use crate::format::SolutionDefinition;
use repair_core::models::{Problem, Time, repair_duration, repairable};
use repair_core::solver::{TimeCheck, check_time};

/// Checks that the time is the minimal repair time. Returns a human readable verdict.
pub fn check_repair_time(problem: &Problem, time: Time) -> Result<String, String> {
    match check_time(problem, time) {
        TimeCheck::Minimal => Ok(format!("time {time} is minimal")),
        TimeCheck::NotMinimal { minimal } => {
            Err(format!("time {time} is feasible, but not minimal: {minimal} is enough"))
        }
        TimeCheck::Infeasible { capacity } => {
            Err(format!("time {time} is infeasible: only {capacity} of {} cars can be repaired", problem.cars()))
        }
    }
}

/// Checks the solution against the problem: the time should be minimal and assignments should
/// repair all cars within it. All found errors are returned.
pub fn check_solution(problem: &Problem, solution: &SolutionDefinition) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(err) = check_repair_time(problem, solution.time) {
        errors.push(err);
    }

    let ranks = problem.ranks();
    solution.assignments.iter().for_each(|assignment| match ranks.get(assignment.worker) {
        None => errors.push(format!("unknown worker {}", assignment.worker)),
        Some(&rank) if rank != assignment.rank => {
            errors.push(format!("worker {} has rank {rank}, got {}", assignment.worker, assignment.rank))
        }
        Some(&rank) => {
            if assignment.cars > repairable(rank, solution.time) {
                errors.push(format!(
                    "worker {} cannot repair {} cars within {}",
                    assignment.worker, assignment.cars, solution.time
                ));
            }
            if repair_duration(rank, assignment.cars) != Some(assignment.finish) {
                errors.push(format!("worker {} has invalid finish time {}", assignment.worker, assignment.finish));
            }
        }
    });

    let mut workers = solution.assignments.iter().map(|assignment| assignment.worker).collect::<Vec<_>>();
    workers.sort_unstable();
    if workers.windows(2).any(|pair| pair[0] == pair[1]) {
        errors.push("some workers are assigned more than once".to_string());
    }

    let total = solution.assignments.iter().map(|assignment| assignment.cars).fold(0_u64, u64::saturating_add);
    if total != problem.cars() {
        errors.push(format!("assignments repair {total} cars, expected {}", problem.cars()));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
