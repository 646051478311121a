//! Reduces an [`Expr`] tree to a signed 64-bit integer.
//!
//! Arithmetic is checked: `+`, `-`, `*`, negation, `/` and `%` fail with [`EvalError::Overflow`]
//! instead of wrapping. `/` and `%` truncate toward zero. Comparisons and `!` produce `1` or `0`.

use log::{debug, trace};
use simplang_parser::{BinaryOp, Expr, UnaryOp};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero in `{lhs} {} 0`", .op.symbol())]
    DivisionByZero { op: BinaryOp, lhs: i64 },
    #[error("integer overflow in `{operation}`")]
    Overflow { operation: String },
    #[error("unbound identifier `{0}`")]
    UnboundIdentifier(String),
}

/// Evaluates `expr`.
/// Operands are evaluated left to right and only the selected branch of an `if` is evaluated.
pub fn evaluate(expr: &Expr) -> Result<i64, EvalError> {
    let result = eval_expr(expr);
    debug!("evaluated expression: {:?}", result);
    result
}

fn eval_expr(expr: &Expr) -> Result<i64, EvalError> {
    match expr {
        Expr::IntegerLit(val) => Ok(*val),
        Expr::Identifier(ident) => Err(EvalError::UnboundIdentifier(ident.clone())),
        Expr::If {
            condition,
            consequent,
            alternative,
        } => {
            let condition = eval_expr(condition)?;
            trace!("if condition is {}", condition);
            if condition != 0 {
                eval_expr(consequent)
            } else {
                eval_expr(alternative)
            }
        }
        Expr::Unary { op, arg } => {
            let arg = eval_expr(arg)?;
            eval_unary(*op, arg)
        }
        Expr::Binary { lhs, op, rhs } => {
            let lhs = eval_expr(lhs)?;
            let rhs = eval_expr(rhs)?;
            eval_binary(*op, lhs, rhs)
        }
    }
}

fn eval_unary(op: UnaryOp, arg: i64) -> Result<i64, EvalError> {
    match op {
        UnaryOp::Neg => arg.checked_neg().ok_or_else(|| EvalError::Overflow {
            operation: format!("-({})", arg),
        }),
        UnaryOp::Not => Ok((arg == 0) as i64),
        UnaryOp::BitNot => Ok(!arg),
    }
}

fn eval_binary(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    /// Generate checked arithmetic for binary operator.
    macro_rules! checked_arith_op {
        ($method: ident) => {
            lhs.$method(rhs).ok_or_else(|| EvalError::Overflow {
                operation: format!("{} {} {}", lhs, op.symbol(), rhs),
            })
        };
    }

    /// Generate comparison for binary operator.
    macro_rules! cmp_op {
        ($op: tt) => {
            Ok((lhs $op rhs) as i64)
        };
    }

    match op {
        BinaryOp::Add => checked_arith_op!(checked_add),
        BinaryOp::Sub => checked_arith_op!(checked_sub),
        BinaryOp::Mul => checked_arith_op!(checked_mul),
        BinaryOp::Div | BinaryOp::Rem if rhs == 0 => Err(EvalError::DivisionByZero { op, lhs }),
        BinaryOp::Div => checked_arith_op!(checked_div),
        BinaryOp::Rem => checked_arith_op!(checked_rem),
        BinaryOp::Eq => cmp_op!(==),
        BinaryOp::Ne => cmp_op!(!=),
        BinaryOp::Lt => cmp_op!(<),
        BinaryOp::Le => cmp_op!(<=),
        BinaryOp::Gt => cmp_op!(>),
        BinaryOp::Ge => cmp_op!(>=),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplang_parser::{parse_program, Context};
    use simplang_source::Source;

    fn eval(source: &str) -> Result<i64, EvalError> {
        let source: Source = source.into();
        let mut ctx = Context::new(&source);
        let ast = parse_program(&mut ctx).unwrap();
        evaluate(&ast)
    }

    #[test]
    fn test_literal() {
        assert_eq!(eval("42"), Ok(42));
        assert_eq!(eval("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("1 + 2 * 3"), Ok(7));
        assert_eq!(eval("(1 + 2) * 3"), Ok(9));
        assert_eq!(eval("10 - 3 - 2"), Ok(5));
        assert_eq!(eval("100 / 10 / 5"), Ok(2));
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(eval("-7 / 2"), Ok(-3));
        assert_eq!(eval("-7 % 2"), Ok(-1));
        assert_eq!(eval("7 % -3"), Ok(1));
    }

    #[test]
    fn test_comparison() {
        assert_eq!(eval("1 < 2"), Ok(1));
        assert_eq!(eval("2 <= 1"), Ok(0));
        assert_eq!(eval("3 > 3"), Ok(0));
        assert_eq!(eval("3 >= 3"), Ok(1));
        assert_eq!(eval("1 + 1 == 2"), Ok(1));
        assert_eq!(eval("1 != 1"), Ok(0));
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval("--5"), Ok(5));
        assert_eq!(eval("-5"), Ok(-5));
        assert_eq!(eval("!0"), Ok(1));
        assert_eq!(eval("!17"), Ok(0));
        assert_eq!(eval("!!17"), Ok(1));
        assert_eq!(eval("~0"), Ok(-1));
        assert_eq!(eval("~~12"), Ok(12));
    }

    #[test]
    fn test_if_short_circuit() {
        assert_eq!(eval("if (1) 5 else (1 / 0)"), Ok(5));
        assert_eq!(eval("if (0) (1 / 0) else 5"), Ok(5));
        assert_eq!(eval("if (-3) undefined_name else 1"), Err(EvalError::UnboundIdentifier("undefined_name".to_string())));
        assert_eq!(eval("if (2 > 1) 10 else 20"), Ok(10));
        assert_eq!(eval("if (1 / 0) 1 else 2"), Err(EvalError::DivisionByZero { op: BinaryOp::Div, lhs: 1 }));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            eval("7 / (3 - 3)"),
            Err(EvalError::DivisionByZero {
                op: BinaryOp::Div,
                lhs: 7
            })
        );
        assert_eq!(
            eval("7 % 0"),
            Err(EvalError::DivisionByZero {
                op: BinaryOp::Rem,
                lhs: 7
            })
        );
        assert_eq!(
            eval("7 % 0").unwrap_err().to_string(),
            "division by zero in `7 % 0`"
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            eval("9223372036854775807 + 1"),
            Err(EvalError::Overflow {
                operation: "9223372036854775807 + 1".to_string()
            })
        );
        assert!(matches!(
            eval("-9223372036854775807 - 2"),
            Err(EvalError::Overflow { .. })
        ));
        assert!(matches!(
            eval("4611686018427387904 * 2"),
            Err(EvalError::Overflow { .. })
        ));
        assert_eq!(
            eval("-(-9223372036854775807 - 1)"),
            Err(EvalError::Overflow {
                operation: "-(-9223372036854775808)".to_string()
            })
        );
        assert!(matches!(
            eval("(-9223372036854775807 - 1) / -1"),
            Err(EvalError::Overflow { .. })
        ));
        assert!(matches!(
            eval("(-9223372036854775807 - 1) % -1"),
            Err(EvalError::Overflow { .. })
        ));
    }

    #[test]
    fn test_unbound_identifier() {
        assert_eq!(
            eval("x"),
            Err(EvalError::UnboundIdentifier("x".to_string()))
        );
        assert_eq!(
            eval("x").unwrap_err().to_string(),
            "unbound identifier `x`"
        );
    }

    #[test]
    fn test_left_to_right() {
        assert_eq!(
            eval("(1 / 0) + x"),
            Err(EvalError::DivisionByZero {
                op: BinaryOp::Div,
                lhs: 1
            })
        );
        assert_eq!(
            eval("x + (1 / 0)"),
            Err(EvalError::UnboundIdentifier("x".to_string()))
        );
    }
}
