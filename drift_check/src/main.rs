use clap::Parser;
use colored::Colorize;
use common::config::DriftConfig;
use common::logger::init_logging;
use drift_check::cli::Args;
use drift_check::{exit_codes, run};
use std::io;

fn main() {
    let args = Args::parse();
    let config = DriftConfig::global().clone();
    let guard = init_logging(&config);

    let code = match run(&args, &config, &mut io::stdout(), &mut io::stderr()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            exit_codes::INTERNAL_ERROR
        }
    };

    // `exit` skips destructors; flush the log file first.
    drop(guard);
    std::process::exit(code);
}
