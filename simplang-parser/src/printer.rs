//! Textual rendering of tokens and expression trees.

use crate::ast::Expr;
use crate::lexer::Token;
use std::fmt;

/// Indent added for every level of nesting in an [`Expr`] dump.
const INDENT: &str = "  ";

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.keyword_name() {
            return write!(f, "keyword {}", name);
        }
        if let Some(name) = self.operator_name() {
            return write!(f, "operator {}", name);
        }
        match self {
            Token::Integer(val) => write!(f, "integer {}", val),
            Token::Identifier(ident) => write!(f, "identifier {}", ident),
            Token::Eof => write!(f, "end of input"),
            _ => write!(f, "invalid token"),
        }
    }
}

impl Expr {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            f.write_str(INDENT)?;
        }
        match self {
            Expr::IntegerLit(val) => writeln!(f, "{}", val),
            Expr::Identifier(ident) => writeln!(f, "{}", ident),
            Expr::If {
                condition,
                consequent,
                alternative,
            } => {
                writeln!(f, "if")?;
                condition.fmt_indented(f, depth + 1)?;
                consequent.fmt_indented(f, depth + 1)?;
                alternative.fmt_indented(f, depth + 1)
            }
            Expr::Unary { op, arg } => {
                writeln!(f, "{}", op.symbol())?;
                arg.fmt_indented(f, depth + 1)
            }
            Expr::Binary { lhs, op, rhs } => {
                writeln!(f, "{}", op.symbol())?;
                lhs.fmt_indented(f, depth + 1)?;
                rhs.fmt_indented(f, depth + 1)
            }
        }
    }
}

/// Pre-order dump, one node per line.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
