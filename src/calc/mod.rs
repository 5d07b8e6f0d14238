//! # Calculator
//!
//! Strict arithmetic over `f64` with `+ - * /`, grouping, unary minus,
//! square root, and pi. Expressions are tokenized, parsed by recursive
//! descent, and evaluated over the AST; there is no string rewriting
//! and no dynamic evaluation.
//!
//! ## Design Principles
//!
//! 1. **Errors over sentinels**: division by zero and negative square
//!    roots fail with a message instead of yielding `Infinity`/`NaN`
//! 2. **Positions in messages**: lexer and parser errors carry the
//!    character offset of the offending input
//! 3. **One leniency**: groups left open at end of input are closed
//!    implicitly, as a pocket calculator would

mod errors;
mod eval;
mod parser;
mod token;

pub use errors::{CalcError, CalcResult};
pub use eval::{evaluate, evaluate_expression, format_value};
pub use parser::{parse, Expr};
pub use token::{tokenize, SpannedToken, Token};
