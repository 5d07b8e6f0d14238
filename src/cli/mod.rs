//! CLI module for kitbag
//!
//! Provides the command-line interface:
//! - blog: the durable post journal (create, update, delete, show,
//!   list, stats, export, import, theme)
//! - weather: one-shot city weather lookup
//! - calc: arithmetic expression evaluation
//! - age: full years between two dates
//! - rps: rock paper scissors, one-shot or interactive
//! - init: write a default config and seed the store

mod args;
mod commands;
mod errors;
mod io;

pub use args::{BlogAction, Cli, Command};
pub use commands::{init, run, run_command, Config, WeatherConfig};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
