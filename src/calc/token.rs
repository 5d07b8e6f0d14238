//! # Expression Lexer
//!
//! Splits an arithmetic expression into tokens. Numbers are decimal
//! literals (a leading or trailing dot is fine, `1.2.3` is not). The
//! square root and pi symbols are accepted both as `√`/`π` and as the
//! ASCII spellings `sqrt`/`pi`.

use crate::calc::errors::{CalcError, CalcResult};

/// A single lexical unit of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Pi,
    Sqrt,
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
}

impl Token {
    /// Human-readable description, used in parse error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {}", n),
            Token::Pi => "'π'".to_string(),
            Token::Sqrt => "'√'".to_string(),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::OpenParen => "'('".to_string(),
            Token::CloseParen => "')'".to_string(),
        }
    }
}

/// A token together with the character offset where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

/// Tokenize an expression. Positions are character offsets, so error
/// messages line up with what the user typed even around `√` and `π`.
pub fn tokenize(input: &str) -> CalcResult<Vec<SpannedToken>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        let position = index;

        if ch.is_whitespace() {
            index += 1;
            continue;
        }

        let token = match ch {
            '+' => {
                index += 1;
                Token::Plus
            }
            '-' => {
                index += 1;
                Token::Minus
            }
            '*' => {
                index += 1;
                Token::Star
            }
            '/' => {
                index += 1;
                Token::Slash
            }
            '(' => {
                index += 1;
                Token::OpenParen
            }
            ')' => {
                index += 1;
                Token::CloseParen
            }
            '√' => {
                index += 1;
                Token::Sqrt
            }
            'π' => {
                index += 1;
                Token::Pi
            }
            _ if ch.is_ascii_digit() || ch == '.' => {
                let start = index;
                while index < chars.len()
                    && (chars[index].is_ascii_digit() || chars[index] == '.')
                {
                    index += 1;
                }
                let literal: String = chars[start..index].iter().collect();
                let value = literal.parse::<f64>().map_err(|_| {
                    CalcError::InvalidNumber {
                        literal: literal.clone(),
                        position: start,
                    }
                })?;
                Token::Number(value)
            }
            _ if ch.is_ascii_alphabetic() => {
                let start = index;
                while index < chars.len() && chars[index].is_ascii_alphabetic() {
                    index += 1;
                }
                let word: String = chars[start..index].iter().collect();
                match word.to_ascii_lowercase().as_str() {
                    "sqrt" => Token::Sqrt,
                    "pi" => Token::Pi,
                    _ => {
                        return Err(CalcError::UnexpectedChar {
                            ch,
                            position: start,
                        })
                    }
                }
            }
            _ => return Err(CalcError::UnexpectedChar { ch, position }),
        };

        tokens.push(SpannedToken { token, position });
    }

    Ok(tokens)
}
