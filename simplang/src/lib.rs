//! Driver entry points: dump tokens, dump the parsed tree or evaluate a source.

use log::info;
use simplang_eval::{evaluate, EvalError};
use simplang_parser::{parse_program, Context, LexError, ParseError, Token};
use simplang_source::{IoError, Source};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// What to do with a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Print every token on its own line.
    Tokens,
    /// Print the parsed expression tree.
    Tree,
    /// Evaluate the expression and print the result.
    Eval,
}

/// Runs `mode` over `source`, writing the result to `out`.
pub fn run(mode: Mode, source: &Source, out: &mut impl Write) -> Result<(), Error> {
    info!("running {:?} on `{}`", mode, source.name);
    match mode {
        Mode::Tokens => dump_tokens(source, out),
        Mode::Tree => dump_tree(source, out),
        Mode::Eval => eval(source, out),
    }
}

/// Writes one line per token until the end of input.
pub fn dump_tokens(source: &Source, out: &mut impl Write) -> Result<(), Error> {
    let mut ctx = Context::new(source);
    loop {
        let (token, _) = ctx.next_token()?;
        if token == Token::Eof {
            break;
        }
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Parses the program and writes its tree, one node per line.
pub fn dump_tree(source: &Source, out: &mut impl Write) -> Result<(), Error> {
    let mut ctx = Context::new(source);
    let expr = parse_program(&mut ctx)?;
    write!(out, "{}", expr)?;
    Ok(())
}

/// Parses and evaluates the program, then writes the result.
pub fn eval(source: &Source, out: &mut impl Write) -> Result<(), Error> {
    let mut ctx = Context::new(source);
    let expr = parse_program(&mut ctx)?;
    let result = evaluate(&expr)?;
    writeln!(out, "{}", result)?;
    Ok(())
}
