//! Observability for kitbag
//!
//! Structured JSON logging only. Principles:
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//! 5. stdout belongs to command output; log lines go to stderr
//!
//! # Usage
//!
//! ```ignore
//! use kitbag::observability::Logger;
//!
//! Logger::info("POST_CREATED", &[("id", "1705312200000")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
