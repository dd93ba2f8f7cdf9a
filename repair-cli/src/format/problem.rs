#[cfg(test)]
#[path = "../../tests/unit/format/problem_test.rs"]
mod problem_test;

use repair_core::models::Problem;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::Arc;

/// A problem definition in json format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProblemDefinition {
    /// Workers' ranks.
    pub ranks: Vec<i64>,
    /// Amount of cars to be repaired.
    pub cars: i64,
}

impl ProblemDefinition {
    /// Converts the definition into validated core problem.
    pub fn to_problem(&self) -> Result<Arc<Problem>, String> {
        Problem::new(self.ranks.as_slice(), self.cars)
            .map(Arc::new)
            .map_err(|err| format!("invalid problem: {err}"))
    }
}

/// Reads problem from json.
pub trait JsonProblem {
    /// Reads json problem and validates it.
    fn read_json_problem(self) -> Result<Arc<Problem>, String>;
}

impl<R: Read> JsonProblem for BufReader<R> {
    fn read_json_problem(self) -> Result<Arc<Problem>, String> {
        deserialize_problem(self).and_then(|definition| definition.to_problem())
    }
}

/// Deserializes problem definition from json without validating it.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<ProblemDefinition, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize problem: '{err}'"))
}

/// Serializes problem definition into json and flushes the writer.
pub fn serialize_problem<W: Write>(mut writer: BufWriter<W>, definition: &ProblemDefinition) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut writer, definition).map_err(|err| format!("cannot serialize problem: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write problem: '{err}'"))
}

/// Reads a problem from csv: a header with `rank` column and one worker per row. Amount of cars is
/// not part of the file.
#[cfg(feature = "csv-format")]
pub fn read_csv_problem<R: Read>(reader: BufReader<R>, cars: i64) -> Result<Arc<Problem>, String> {
    #[derive(Deserialize)]
    struct WorkerRecord {
        rank: i64,
    }

    let ranks = csv::Reader::from_reader(reader)
        .deserialize::<WorkerRecord>()
        .map(|record| record.map(|record| record.rank).map_err(|err| format!("cannot read worker: '{err}'")))
        .collect::<Result<Vec<_>, _>>()?;

    ProblemDefinition { ranks, cars }.to_problem()
}
