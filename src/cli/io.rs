//! JSON I/O handling for CLI
//!
//! Every invocation writes envelopes to stdout and nothing else there:
//! `{"status":"ok","data":…}` or `{"status":"error","code":…,"message":…}`.
//! Prompts go to stderr so piped output stays machine-readable.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response carrying a structured `details` payload
/// (the validation field-to-message map)
pub fn write_error_details(code: &str, message: &str, details: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message,
        "details": details
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Ask a yes/no question on stderr and read the answer from stdin.
/// Only `y`/`yes` (any case) confirms; EOF declines.
pub fn prompt_confirm(question: &str) -> CliResult<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N] ", question)?;
    stderr.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(false);
    }

    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Read stdin line by line (for the interactive game loop)
pub fn read_lines() -> impl Iterator<Item = CliResult<String>> {
    io::stdin().lock().lines().map(|line| line.map_err(CliError::from))
}
