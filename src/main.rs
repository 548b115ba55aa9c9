//! Terminal entry point.
//!
//! Loads configuration, starts file logging, opens the catalog, and runs the
//! page router on stdin/stdout from the home page until the user exits.
//!
//! # Exit Codes
//!
//! - `0`: the session ended on the exit page (or stdin was closed)
//! - `1`: a fatal error, such as an unreadable or corrupt collection file

use bookshelf::observability::init_tracing;
use bookshelf::{initialize, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bookshelf: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    tracing::info!(data_file = %config.data_file.display(), "bookshelf starting");

    let result = initialize(&config).and_then(|mut router| router.start());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            eprintln!("bookshelf: {e}");
            ExitCode::FAILURE
        }
    }
}
