#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use repair_core::models::{Rank, Solution, Time};
use repair_core::solver::Metrics;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// A worker assignment in json format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AssignmentDefinition {
    /// Worker index.
    pub worker: usize,
    /// Worker's rank.
    pub rank: Rank,
    /// Amount of cars repaired by the worker.
    pub cars: u64,
    /// Time when the worker is done.
    pub finish: Time,
}

/// Search metrics in json format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDefinition {
    /// Duration in milliseconds.
    pub duration: usize,
    /// Amount of capacity evaluations.
    pub iterations: usize,
    /// Lower bound of the search range.
    pub lower_bound: Time,
    /// Upper bound of the search range.
    pub upper_bound: Time,
}

/// A solution in json format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SolutionDefinition {
    /// Minimal repair time.
    pub time: Time,
    /// Cars distributed among workers.
    pub assignments: Vec<AssignmentDefinition>,
    /// Search metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsDefinition>,
}

impl SolutionDefinition {
    /// Creates a solution definition from core models.
    pub fn new(solution: &Solution, metrics: Option<&Metrics>) -> Self {
        Self {
            time: solution.time,
            assignments: solution
                .assignments
                .iter()
                .map(|assignment| AssignmentDefinition {
                    worker: assignment.worker,
                    rank: assignment.rank,
                    cars: assignment.cars,
                    finish: assignment.finish,
                })
                .collect(),
            metrics: metrics.map(|metrics| MetricsDefinition {
                duration: metrics.duration,
                iterations: metrics.iterations,
                lower_bound: metrics.lower_bound,
                upper_bound: metrics.upper_bound,
            }),
        }
    }
}

/// Serializes solution with optional metrics into json.
pub fn serialize_solution<W: Write>(writer: W, solution: &Solution, metrics: Option<&Metrics>) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, &SolutionDefinition::new(solution, metrics))
        .map_err(|err| format!("cannot serialize solution: '{err}'"))
}

/// Deserializes solution from json.
pub fn deserialize_solution<R: Read>(reader: R) -> Result<SolutionDefinition, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize solution: '{err}'"))
}
