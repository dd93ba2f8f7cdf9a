//! A command line interface library for the minimum repair time solver: problem and solution
//! formats, solver configuration and helpers behind `solve`, `check` and `generate` commands.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;
pub mod format;

use repair_core::prelude::*;
use std::io::{BufReader, Read};

/// Reads a problem from json and returns minimal repair time serialized as json string.
pub fn solve_json_problem<R: Read>(reader: BufReader<R>) -> Result<String, String> {
    use crate::format::{JsonProblem, serialize_solution};

    let problem = reader.read_json_problem()?;
    let (solution, metrics) = Solver::new(problem)
        .with_telemetry(Telemetry::new(TelemetryMode::OnlyMetrics))
        .solve()
        .map_err(String::from)?;

    let mut buffer = Vec::new();
    serialize_solution(&mut buffer, &solution, metrics.as_ref())?;

    String::from_utf8(buffer).map_err(|err| format!("cannot write solution: '{err}'"))
}
