// File: ./src/bin/tasklex.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    tasklex::cli::run()
}
