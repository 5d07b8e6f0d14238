//! # Expression Parser
//!
//! Recursive descent over a small arithmetic grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-' unary | '√' unary | primary
//! primary := number | 'π' | '(' expr ')'
//! ```
//!
//! Square root binds to the unary that follows it, so `√9+1` is
//! `√9` plus one and `√(9+7)` takes the root of the sum. As a
//! pocket-calculator leniency, groups still open when the input ends
//! are closed implicitly: `(2+3` parses as `(2+3)`.

use crate::calc::errors::{CalcError, CalcResult};
use crate::calc::token::{tokenize, SpannedToken, Token};

/// Parsed arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Pi,
    Neg(Box<Expr>),
    Sqrt(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

/// Parse an expression string into an AST
pub fn parse(input: &str) -> CalcResult<Expr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, index: 0 };
    let expr = parser.parse_expr()?;
    if let Some(extra) = parser.peek() {
        return Err(CalcError::UnexpectedToken {
            found: extra.token.describe(),
            position: extra.position,
        });
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<SpannedToken>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn parse_expr(&mut self) -> CalcResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            match self.peek().map(|t| t.token.clone()) {
                Some(Token::Plus) => {
                    self.advance();
                    let right = self.parse_term()?;
                    left = Expr::Add(Box::new(left), Box::new(right));
                }
                Some(Token::Minus) => {
                    self.advance();
                    let right = self.parse_term()?;
                    left = Expr::Sub(Box::new(left), Box::new(right));
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_term(&mut self) -> CalcResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            match self.peek().map(|t| t.token.clone()) {
                Some(Token::Star) => {
                    self.advance();
                    let right = self.parse_unary()?;
                    left = Expr::Mul(Box::new(left), Box::new(right));
                }
                Some(Token::Slash) => {
                    self.advance();
                    let right = self.parse_unary()?;
                    left = Expr::Div(Box::new(left), Box::new(right));
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_unary(&mut self) -> CalcResult<Expr> {
        match self.peek().map(|t| t.token.clone()) {
            Some(Token::Minus) => {
                self.advance();
                let inner = self.parse_unary()?;
                Ok(Expr::Neg(Box::new(inner)))
            }
            Some(Token::Sqrt) => {
                self.advance();
                let inner = self.parse_unary()?;
                Ok(Expr::Sqrt(Box::new(inner)))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> CalcResult<Expr> {
        let spanned = match self.advance() {
            Some(spanned) => spanned,
            None => return Err(CalcError::UnexpectedEnd),
        };
        match spanned.token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::Pi => Ok(Expr::Pi),
            Token::OpenParen => {
                let inner = self.parse_expr()?;
                match self.peek() {
                    Some(next) if next.token == Token::CloseParen => {
                        self.advance();
                        Ok(inner)
                    }
                    // Unclosed group at end of input closes implicitly
                    None => Ok(inner),
                    Some(next) => Err(CalcError::UnexpectedToken {
                        found: next.token.describe(),
                        position: next.position,
                    }),
                }
            }
            other => Err(CalcError::UnexpectedToken {
                found: other.describe(),
                position: spanned.position,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> Box<Expr> {
        Box::new(Expr::Number(value))
    }

    #[test]
    fn test_parse_respects_precedence() {
        assert_eq!(
            parse("2+3*4").unwrap(),
            Expr::Add(num(2.0), Box::new(Expr::Mul(num(3.0), num(4.0))))
        );
    }

    #[test]
    fn test_parse_parentheses_override_precedence() {
        assert_eq!(
            parse("(2+3)*4").unwrap(),
            Expr::Mul(Box::new(Expr::Add(num(2.0), num(3.0))), num(4.0))
        );
    }

    #[test]
    fn test_parse_subtraction_is_left_associative() {
        assert_eq!(
            parse("10-4-3").unwrap(),
            Expr::Sub(Box::new(Expr::Sub(num(10.0), num(4.0))), num(3.0))
        );
    }

    #[test]
    fn test_parse_unary_minus_nests() {
        assert_eq!(
            parse("-5+3").unwrap(),
            Expr::Add(Box::new(Expr::Neg(num(5.0))), num(3.0))
        );
        assert_eq!(
            parse("--5").unwrap(),
            Expr::Neg(Box::new(Expr::Neg(num(5.0))))
        );
    }

    #[test]
    fn test_parse_sqrt_binds_to_next_unary() {
        assert_eq!(
            parse("√9+1").unwrap(),
            Expr::Add(Box::new(Expr::Sqrt(num(9.0))), num(1.0))
        );
        assert_eq!(
            parse("-√4").unwrap(),
            Expr::Neg(Box::new(Expr::Sqrt(num(4.0))))
        );
        assert_eq!(
            parse("√-4").unwrap(),
            Expr::Sqrt(Box::new(Expr::Neg(num(4.0))))
        );
    }

    #[test]
    fn test_parse_auto_closes_open_groups_at_end() {
        assert_eq!(parse("(2+3").unwrap(), parse("(2+3)").unwrap());
        assert_eq!(parse("((1+1").unwrap(), parse("((1+1))").unwrap());
        assert_eq!(parse("√(9").unwrap(), Expr::Sqrt(Box::new(Expr::Number(9.0))));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(parse("").unwrap_err(), CalcError::UnexpectedEnd);
        assert_eq!(parse("   ").unwrap_err(), CalcError::UnexpectedEnd);
    }

    #[test]
    fn test_parse_rejects_trailing_operator() {
        assert_eq!(parse("2+").unwrap_err(), CalcError::UnexpectedEnd);
    }

    #[test]
    fn test_parse_rejects_leftover_tokens() {
        assert_eq!(
            parse("1 2").unwrap_err(),
            CalcError::UnexpectedToken {
                found: "number 2".to_string(),
                position: 2,
            }
        );
        assert_eq!(
            parse(")").unwrap_err(),
            CalcError::UnexpectedToken {
                found: "')'".to_string(),
                position: 0,
            }
        );
    }

    #[test]
    fn test_parse_rejects_adjacent_operands() {
        // No implicit multiplication: 2π needs an explicit star
        assert!(parse("2π").is_err());
    }
}
