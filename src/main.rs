//! kitbag CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to CLI commands (via cli::run)
//! 3. Exits with non-zero on failure
//!
//! The error envelope is written by the CLI module; main only sets the
//! exit code.

use kitbag::cli;

fn main() {
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
