#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use repair_cli::extensions::check::check_repair_time;
use repair_cli::extensions::solve::config::{Config, create_solver_from_config, read_config};
use repair_cli::format::{JsonProblem, serialize_solution};
use repair_core::models::Problem;
use repair_core::solver::InfoLogger;
use std::io::BufReader;
use std::sync::Arc;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CARS_ARG_NAME: &str = "cars";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds the minimum time needed to repair all cars")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem format")
                .required(true)
                .value_parser(["json", "csv"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(CARS_ARG_NAME)
                .help("Specifies amount of cars to repair, required for csv format")
                .short('n')
                .long(CARS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress should be logged")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Checks that the found time is minimal")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(matches: &ArgMatches, logger: InfoLogger) -> Result<(), String> {
    let problem = read_problem(matches)?;

    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };
    if matches.get_flag(LOG_ARG_NAME) {
        config.set_logging(true);
    }

    let (solution, metrics) =
        create_solver_from_config(problem.clone(), &config, logger).solve().map_err(|err| err.to_string())?;

    if matches.get_flag(CHECK_ARG_NAME) {
        check_repair_time(problem.as_ref(), solution.time)?;
    }

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut out_buffer = create_write_buffer(out_result);

    serialize_solution(&mut out_buffer, &solution, metrics.as_ref())?;
    out_buffer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}

fn read_problem(matches: &ArgMatches) -> Result<Arc<Problem>, String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str).unwrap_or("json");
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let problem_file = BufReader::new(open_file(problem_path, "problem")?);

    match input_format {
        "json" => problem_file.read_json_problem(),
        #[cfg(feature = "csv-format")]
        "csv" => {
            let cars = parse_int_value::<i64>(matches, CARS_ARG_NAME, "amount of cars")?
                .ok_or("csv format requires amount of cars to be specified")?;
            repair_cli::format::read_csv_problem(problem_file, cars)
        }
        _ => Err(format!("unknown format: '{input_format}'")),
    }
}
