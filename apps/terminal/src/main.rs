//! # Tillroll Entry Point
//!
//! The setup lives in `lib.rs` so the session can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tillroll_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tillroll: {}", err);
            ExitCode::FAILURE
        }
    }
}
