//! A command line interface to the minimum repair time solver.
//!

mod commands;

use std::process;

fn main() {
    let matches = cli::get_app().get_matches();

    if let Err(err) = cli::run_subcommand(matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

mod cli {
    use crate::commands::check::{get_check_app, run_check};
    use crate::commands::generate::{get_generate_app, run_generate};
    use crate::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::sync::Arc;

    pub fn get_app() -> Command {
        Command::new("Minimum Repair Time Solver")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to find the minimum time needed by a fleet of workers to repair cars")
            .subcommand_required(true)
            .subcommand(get_solve_app())
            .subcommand(get_check_app())
            .subcommand(get_generate_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) -> Result<(), String> {
        match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, Arc::new(|msg: &str| eprintln!("{msg}"))),
            Some(("check", check_matches)) => run_check(check_matches),
            Some(("generate", generate_matches)) => run_generate(generate_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        }
    }
}
