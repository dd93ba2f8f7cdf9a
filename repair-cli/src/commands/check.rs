#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use repair_cli::extensions::check::{check_repair_time, check_solution};
use repair_cli::format::{JsonProblem, deserialize_solution};
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const TIME_ARG_NAME: &str = "time";
const SOLUTION_ARG_NAME: &str = "solution-file";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check whether a time or a solution is minimal")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file in json format").required(true).index(1))
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies time to check")
                .short('t')
                .long(TIME_ARG_NAME)
                .required_unless_present(SOLUTION_ARG_NAME)
                .conflicts_with(SOLUTION_ARG_NAME),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file in json format")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(false),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let problem = BufReader::new(open_file(problem_path, "problem")?).read_json_problem()?;

    if let Some(time) = parse_int_value::<u64>(matches, TIME_ARG_NAME, "time")? {
        let verdict = check_repair_time(problem.as_ref(), time)?;
        println!("{verdict}");

        return Ok(());
    }

    let solution_path = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("solution file is not specified")?;
    let solution = deserialize_solution(BufReader::new(open_file(solution_path, "solution")?))?;

    check_solution(problem.as_ref(), &solution)
        .map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")))
}
