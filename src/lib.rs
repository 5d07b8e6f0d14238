//! kitbag - a strict, deterministic everyday-tools CLI
//!
//! One binary, five tools: a durable blog journal, a city weather
//! lookup, an arithmetic calculator, an age calculator, and rock paper
//! scissors. Every invocation emits one JSON envelope on stdout; logs
//! go to stderr.

pub mod age;
pub mod blog;
pub mod calc;
pub mod cli;
pub mod observability;
pub mod rps;
pub mod weather;
