//! Program runner: evaluates lines in order against one environment.

use arith_ir::{ParseTree, StringInterner};
use tracing::debug;

use crate::{evaluate, Environment, EvalError, Outcome, Value};

/// An evaluation error with the index of the line that raised it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("line {}: {error}", .index + 1)]
pub struct LineError<E> {
    /// Zero-based position of the failing tree in the program.
    pub index: usize,
    #[source]
    pub error: EvalError<E>,
}

/// Evaluate `trees` in order, threading `env` through every line.
///
/// Stops at the first `return` line and yields its value; later lines are
/// never evaluated. Returns `Ok(None)` if no line returns. On error, `env`
/// keeps every binding made by the lines before the failing one.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<'t, V, I>(
    trees: I,
    env: &mut Environment<V>,
    interner: &StringInterner,
) -> Result<Option<V>, LineError<V::Error>>
where
    V: Value,
    I: IntoIterator<Item = &'t ParseTree>,
{
    for (index, tree) in trees.into_iter().enumerate() {
        match evaluate(tree, env, interner) {
            Ok(Outcome::Returned(value)) => {
                debug!(index, "returned");
                return Ok(Some(value));
            }
            Ok(Outcome::Assigned { .. }) => {}
            Err(error) => return Err(LineError { index, error }),
        }
    }
    Ok(None)
}
