use crate::ast::Expr;
use crate::context::{Context, Span};
use crate::lexer::{LexError, Token};
use log::debug;
use simplang_source::Position;
use std::{fmt, mem};
use thiserror::Error;

mod expr;

/// The grammar rule that was active when parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    /// Start of an operand.
    Expression,
    /// The parenthesized condition of an `if`.
    Condition,
    /// A `)` closing a condition or a parenthesized expression.
    ClosingParen,
    /// The `else` of an `if`.
    Else,
    /// Nothing may follow a complete program.
    EndOfInput,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = match self {
            Production::Expression => "an expression",
            Production::Condition => "`(` before the condition",
            Production::ClosingParen => "`)`",
            Production::Else => "`else`",
            Production::EndOfInput => "end of input",
        };
        f.write_str(expected)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected {found} at {position}, expected {expected}")]
    UnexpectedToken {
        found: Token,
        expected: Production,
        position: Position,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Parses one expression from `ctx`.
/// The first token after the expression is left in `ctx`.
pub fn parse_expression(ctx: &mut Context<'_>) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(ctx)?;
    let expr = parser.parse_expr()?;
    parser.finish();
    Ok(expr)
}

/// Parses one expression from `ctx` and requires the input to end after it.
pub fn parse_program(ctx: &mut Context<'_>) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(ctx)?;
    let expr = parser.parse_program()?;
    parser.finish();
    Ok(expr)
}

pub struct Parser<'c, 'a> {
    /// Cached token for peeking.
    current_token: Token,
    current_span: Span,
    ctx: &'c mut Context<'a>,
}

impl<'c, 'a> Parser<'c, 'a> {
    pub fn new(ctx: &'c mut Context<'a>) -> Result<Self, ParseError> {
        let (current_token, current_span) = ctx.next_token()?;
        Ok(Self {
            current_token,
            current_span,
            ctx,
        })
    }

    /// Hands the unconsumed lookahead token back to the [`Context`].
    pub fn finish(self) {
        let Parser {
            current_token,
            current_span,
            ctx,
        } = self;
        ctx.push_back(current_token, current_span);
    }
}

impl<'c, 'a> Parser<'c, 'a> {
    pub fn parse_program(&mut self) -> Result<Expr, ParseError> {
        debug!("parsing program `{}`", self.ctx.source().name);
        let expr = self.parse_expr()?;
        if self.current_token != Token::Eof {
            return Err(self.unexpected(Production::EndOfInput));
        }
        Ok(expr)
    }
}

/// Parse utilities
impl<'c, 'a> Parser<'c, 'a> {
    /// Advances to the next token and returns the one that was current.
    fn next(&mut self) -> Result<Token, ParseError> {
        let (token, span) = self.ctx.next_token()?;
        self.current_span = span;
        Ok(mem::replace(&mut self.current_token, token))
    }

    /// Predicate that tests whether the next token has the same discriminant and eats the next token if yes as a side effect.
    fn eat(&mut self, tok: Token) -> Result<bool, ParseError> {
        if mem::discriminant(&self.current_token) == mem::discriminant(&tok) {
            self.next()?; // eat token
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, tok: Token, expected: Production) -> Result<(), ParseError> {
        if self.eat(tok)? {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Creates an unexpected token error for the current token.
    fn unexpected(&self, expected: Production) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.current_token.clone(),
            expected,
            position: self.ctx.position(self.current_span.start),
        }
    }
}
