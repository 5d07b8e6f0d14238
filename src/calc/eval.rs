//! # Expression Evaluation
//!
//! Evaluates a parsed expression over `f64`. Division by zero and
//! square roots of negative values are reported as errors instead of
//! producing `Infinity` or `NaN`.

use crate::calc::errors::{CalcError, CalcResult};
use crate::calc::parser::{parse, Expr};

/// Parse and evaluate an expression string
pub fn evaluate_expression(input: &str) -> CalcResult<f64> {
    let expr = parse(input)?;
    evaluate(&expr)
}

/// Evaluate a parsed expression
pub fn evaluate(expr: &Expr) -> CalcResult<f64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Pi => Ok(std::f64::consts::PI),
        Expr::Neg(inner) => Ok(-evaluate(inner)?),
        Expr::Sqrt(inner) => {
            let value = evaluate(inner)?;
            if value < 0.0 {
                return Err(CalcError::NegativeSqrt);
            }
            Ok(value.sqrt())
        }
        Expr::Add(left, right) => Ok(evaluate(left)? + evaluate(right)?),
        Expr::Sub(left, right) => Ok(evaluate(left)? - evaluate(right)?),
        Expr::Mul(left, right) => Ok(evaluate(left)? * evaluate(right)?),
        Expr::Div(left, right) => {
            let divisor = evaluate(right)?;
            if divisor == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(evaluate(left)? / divisor)
        }
    }
}

/// Render a result the way a calculator display would: integer-valued
/// results have no fractional part, negative zero collapses to zero.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(evaluate_expression("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate_expression("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate_expression("10-4-3").unwrap(), 3.0);
        assert_eq!(evaluate_expression("20/2/5").unwrap(), 2.0);
    }

    #[test]
    fn test_evaluate_unary_and_sqrt() {
        assert_eq!(evaluate_expression("-5+3").unwrap(), -2.0);
        assert_eq!(evaluate_expression("√9").unwrap(), 3.0);
        assert_eq!(evaluate_expression("sqrt 16").unwrap(), 4.0);
        assert_eq!(evaluate_expression("√9+1").unwrap(), 4.0);
        assert_eq!(evaluate_expression("√(9+7)").unwrap(), 4.0);
        assert_eq!(evaluate_expression("-√4").unwrap(), -2.0);
    }

    #[test]
    fn test_evaluate_pi() {
        let circumference = evaluate_expression("2*π*10").unwrap();
        assert!((circumference - 62.83185307179586).abs() < 1e-12);
        assert_eq!(
            evaluate_expression("pi").unwrap(),
            std::f64::consts::PI
        );
    }

    #[test]
    fn test_evaluate_auto_closed_groups() {
        assert_eq!(evaluate_expression("(2+3").unwrap(), 5.0);
        assert_eq!(evaluate_expression("2*(3+(4").unwrap(), 14.0);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(
            evaluate_expression("5/0").unwrap_err(),
            CalcError::DivisionByZero
        );
        assert_eq!(
            evaluate_expression("0/0").unwrap_err(),
            CalcError::DivisionByZero
        );
        assert_eq!(
            evaluate_expression("1/(2-2)").unwrap_err(),
            CalcError::DivisionByZero
        );
    }

    #[test]
    fn test_evaluate_negative_sqrt() {
        assert_eq!(
            evaluate_expression("√-4").unwrap_err(),
            CalcError::NegativeSqrt
        );
        assert_eq!(
            evaluate_expression("√(1-2)").unwrap_err(),
            CalcError::NegativeSqrt
        );
    }

    #[test]
    fn test_format_value_drops_trailing_fraction() {
        assert_eq!(format_value(4.0), "4");
        assert_eq!(format_value(3.5), "3.5");
        assert_eq!(format_value(-2.0), "-2");
    }

    #[test]
    fn test_format_value_normalizes_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_float_artifacts_surface_as_is() {
        let value = evaluate_expression("0.1+0.2").unwrap();
        assert_eq!(format_value(value), "0.30000000000000004");
    }
}
