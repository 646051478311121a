//! Lexer, parser and AST for simplang.

pub mod ast;
pub mod context;
pub mod lexer;
pub mod parser;
mod printer;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use context::{Context, Span};
pub use lexer::{LexError, Token};
pub use parser::{parse_expression, parse_program, ParseError, Production};
