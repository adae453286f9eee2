use clap::Parser;
use stamp_version::args::Args;
use stamp_version::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("{e}");
    }

    match stamp_version::run(args) {
        Ok(outcome) => {
            println!("{}", presentation::success_line(&outcome));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", presentation::failure_line(&e));
            ExitCode::FAILURE
        }
    }
}
