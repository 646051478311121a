use logos::Logos;
use simplang_source::Position;
use thiserror::Error;

#[derive(Debug, Logos, Clone, PartialEq)]
pub enum Token {
    // literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Integer(i64),

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // unary operators
    #[token("!")]
    LogicalNot,
    #[token("~")]
    Tilde,

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be unary
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    // - equality
    #[token("==")]
    EqualsEquals,
    #[token("!=")]
    NotEquals,
    // - ordering
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterThanEquals,
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessThanEquals,

    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[error]
    Error,

    /// Only generated by [`Context`](crate::context::Context) once the lexer is exhausted.
    Eof,
}

impl Token {
    /// Returns the spelling of a keyword token or `None` if not a keyword.
    pub fn keyword_name(&self) -> Option<&'static str> {
        match self {
            Token::If => Some("if"),
            Token::Else => Some("else"),
            _ => None,
        }
    }

    /// Returns the spelling of an operator (or parenthesis) token or `None` if not an operator.
    pub fn operator_name(&self) -> Option<&'static str> {
        match self {
            Token::LogicalNot => Some("!"),
            Token::Tilde => Some("~"),
            Token::Plus => Some("+"),
            Token::Minus => Some("-"),
            Token::Asterisk => Some("*"),
            Token::Slash => Some("/"),
            Token::Percent => Some("%"),
            Token::EqualsEquals => Some("=="),
            Token::NotEquals => Some("!="),
            Token::GreaterThan => Some(">"),
            Token::GreaterThanEquals => Some(">="),
            Token::LessThan => Some("<"),
            Token::LessThanEquals => Some("<="),
            Token::OpenParen => Some("("),
            Token::CloseParen => Some(")"),
            _ => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        self.keyword_name().is_some()
    }

    pub fn is_operator(&self) -> bool {
        self.operator_name().is_some()
    }
}

/// An error produced while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{ch}` at {position}")]
    UnexpectedChar { ch: char, position: Position },
    #[error("integer literal `{text}` at {position} does not fit in 64 bits")]
    MalformedNumber { text: String, position: Position },
}

impl LexError {
    /// Classifies a slice that the lexer could not turn into a token.
    /// A run of digits only fails when it overflows, anything else is an unexpected character.
    pub(crate) fn from_slice(slice: &str, position: Position) -> Self {
        if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            LexError::MalformedNumber {
                text: slice.to_string(),
                position,
            }
        } else {
            LexError::UnexpectedChar {
                ch: slice.chars().next().unwrap_or('\0'),
                position,
            }
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { position, .. } | LexError::MalformedNumber { position, .. } => {
                *position
            }
        }
    }
}
