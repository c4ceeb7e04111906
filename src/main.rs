//! Sandbox0 - command-line tool for declaring and validating build targets

use std::process::ExitCode;

use sandbox0::cli;

fn main() -> ExitCode {
    cli::run()
}
