//! Tree-walking evaluation of simplang expressions.

pub mod evaluator;

pub use evaluator::{evaluate, EvalError};
