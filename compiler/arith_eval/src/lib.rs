//! Arith Eval - grammar-directed evaluator for Arith programs.
//!
//! # Architecture
//!
//! - [`Value`]: the numeric interface the evaluator is generic over, with
//!   implementations for `i64`, `f64` and [`Matrix`]
//! - [`Environment`]: variable bindings shared across the lines of a program
//! - [`AttributeTable`]: per-line map from parse tree node to computed value
//! - [`evaluate`]: post-order walk of one line's tree
//! - [`run`]: evaluates lines in order until one returns

mod attributes;
mod environment;
pub mod errors;
mod evaluator;
mod program;
mod value;

pub use attributes::AttributeTable;
pub use environment::Environment;
pub use errors::EvalError;
pub use evaluator::{evaluate, EvaluationContext, Outcome};
pub use program::{run, LineError};
pub use value::{ArithError, Matrix, MatrixError, Value};

#[cfg(test)]
mod tests;
