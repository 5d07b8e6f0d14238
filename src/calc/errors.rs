//! # Calculator Errors

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Lexing, parsing, and evaluation errors.
///
/// Positions are character offsets into the input (the expression may
/// contain multi-byte characters like `√` and `π`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A character the grammar does not know
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    /// A malformed number literal, e.g. `1.2.3`
    #[error("Invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },

    /// A well-formed token in a place the grammar does not allow
    #[error("Unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    /// Input ended where an operand was required
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Square root of a negative value
    #[error("Square root of a negative number")]
    NegativeSqrt,
}

impl CalcError {
    /// Stable error code string for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::UnexpectedChar { .. }
            | CalcError::InvalidNumber { .. }
            | CalcError::UnexpectedToken { .. }
            | CalcError::UnexpectedEnd => "KITBAG_CALC_PARSE",
            CalcError::DivisionByZero => "KITBAG_CALC_DIVIDE_BY_ZERO",
            CalcError::NegativeSqrt => "KITBAG_CALC_NEGATIVE_SQRT",
        }
    }
}
