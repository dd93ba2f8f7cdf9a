#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, Command};
use repair_cli::extensions::generate::generate_problem;
use repair_cli::format::serialize_problem;

const WORKERS_ARG_NAME: &str = "workers";
const CARS_ARG_NAME: &str = "cars";
const MAX_RANK_ARG_NAME: &str = "max-rank";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate random problems for testing")
        .arg(
            Arg::new(WORKERS_ARG_NAME)
                .help("Amount of workers in generated problem")
                .short('w')
                .long(WORKERS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CARS_ARG_NAME)
                .help("Amount of cars to repair in generated problem")
                .short('n')
                .long(CARS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MAX_RANK_ARG_NAME)
                .help("Max worker rank, ranks are distributed uniformly starting from 1")
                .short('r')
                .long(MAX_RANK_ARG_NAME)
                .default_value("100"),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to make generation reproducible")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let workers = parse_int_value::<usize>(matches, WORKERS_ARG_NAME, "amount of workers")?.unwrap_or_default();
    let cars = parse_int_value::<i64>(matches, CARS_ARG_NAME, "amount of cars")?.unwrap_or_default();
    let max_rank = parse_int_value::<i64>(matches, MAX_RANK_ARG_NAME, "max rank")?.unwrap_or(100);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?;

    let definition =
        generate_problem(workers, cars, max_rank, seed).map_err(|err| format!("cannot generate problem: '{err}'"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    serialize_problem(create_write_buffer(out_result), &definition)
}
