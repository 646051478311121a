//! Scan state shared by the lexer and the parser.

use crate::lexer::{LexError, Token};
use log::trace;
use logos::{Lexer, Logos};
use simplang_source::{Position, Source};
use std::ops::Range;

pub type Span = Range<usize>;

/// Cursor over one [`Source`].
/// Hands out tokens one at a time and holds at most one pushed back token.
pub struct Context<'a> {
    lexer: Lexer<'a, Token>,
    /// Token returned to the context by [`Context::push_back`].
    pending: Option<(Token, Span)>,
    /// Set once the lexer is exhausted so that `Eof` is returned from then on.
    at_eof: bool,
    /// Source code
    source: &'a Source,
}

impl<'a> Context<'a> {
    pub fn new(source: &'a Source) -> Self {
        Self {
            lexer: Token::lexer(&source.content),
            pending: None,
            at_eof: false,
            source,
        }
    }

    pub fn source(&self) -> &'a Source {
        self.source
    }

    /// Returns the next token and its span.
    /// Once the end of input is reached every call returns [`Token::Eof`].
    pub fn next_token(&mut self) -> Result<(Token, Span), LexError> {
        if let Some(pending) = self.pending.take() {
            return Ok(pending);
        }

        let end = self.source.content.len();
        if self.at_eof {
            return Ok((Token::Eof, end..end));
        }

        let token = match self.lexer.next() {
            Some(token) => token,
            None => {
                self.at_eof = true;
                return Ok((Token::Eof, end..end));
            }
        };
        let span = self.lexer.span();
        trace!("lexed {:?} at {:?}", token, span);

        if token == Token::Error {
            return Err(LexError::from_slice(
                self.lexer.slice(),
                self.source.position(span.start),
            ));
        }
        Ok((token, span))
    }

    /// Returns a token so that the next call to [`Context::next_token`] yields it again.
    /// Only one token of lookahead is kept.
    pub fn push_back(&mut self, token: Token, span: Span) {
        debug_assert!(self.pending.is_none(), "only one token can be pushed back");
        self.pending = Some((token, span));
    }

    /// Position of the byte `offset` in the underlying source.
    pub fn position(&self, offset: usize) -> Position {
        self.source.position(offset)
    }
}
