//! Evaluation sessions.

use arith_diagnostic::Diagnostic;
use arith_eval::{evaluate, run, Environment, EvalError, LineError, Outcome, Value};
use arith_ir::{ParseTree, SharedInterner, StringInterner};
use arith_parse::{parse_source, ParseError};
use tracing::debug;

/// Failure while running a program, with the 1-based source line it came from.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RunError<E> {
    #[error("line {line}: {error}")]
    Parse {
        line: usize,
        #[source]
        error: ParseError,
    },
    #[error("line {line}: {error}")]
    Eval {
        line: usize,
        #[source]
        error: EvalError<E>,
    },
}

impl<E> RunError<E> {
    /// 1-based line number in the source text.
    pub fn line(&self) -> usize {
        match self {
            RunError::Parse { line, .. } | RunError::Eval { line, .. } => *line,
        }
    }
}

impl<E: std::fmt::Display> RunError<E> {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Parse { line, error } => error.to_diagnostic().on_line(*line),
            RunError::Eval { line, error } => error.to_diagnostic().on_line(*line),
        }
    }
}

/// An interner and an environment that persist across runs.
///
/// Every line run through the session sees the bindings left by earlier
/// ones, including those made by previous calls.
#[derive(Debug)]
pub struct Session<V> {
    interner: SharedInterner,
    env: Environment<V>,
}

impl<V: Value> Session<V> {
    pub fn new() -> Self {
        Self::with_interner(SharedInterner::new())
    }

    /// Session sharing an existing interner.
    pub fn with_interner(interner: SharedInterner) -> Self {
        Session {
            interner,
            env: Environment::new(),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn env(&self) -> &Environment<V> {
        &self.env
    }

    /// Bind `name` directly, returning the value it replaces.
    pub fn bind(&mut self, name: &str, value: V) -> Option<V> {
        let name = self.interner.intern(name);
        self.env.bind(name, value)
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.env.lookup(self.interner.get(name)?)
    }

    /// Bindings sorted by name.
    pub fn bindings(&self) -> Vec<(&'static str, &V)> {
        let mut bindings: Vec<_> = self
            .env
            .iter()
            .map(|(name, value)| (self.interner.lookup(name), value))
            .collect();
        bindings.sort_unstable_by_key(|&(name, _)| name);
        bindings
    }

    /// Parse every non-blank line of `source`, paired with its line number.
    ///
    /// Stops at the first line that fails to parse.
    pub fn parse_program(&self, source: &str) -> Result<Vec<(usize, ParseTree)>, RunError<V::Error>> {
        source
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(index, text)| {
                let line = index + 1;
                parse_source(text, &self.interner)
                    .map(|tree| (line, tree))
                    .map_err(|error| RunError::Parse { line, error })
            })
            .collect()
    }

    /// Parse and run a whole program.
    ///
    /// Every line is parsed before any is evaluated, so a syntax error
    /// fails the program even on a line after the first `return`. Evaluation
    /// stops at the first `return`; `Ok(None)` means no line returned.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_source(&mut self, source: &str) -> Result<Option<V>, RunError<V::Error>> {
        let program = self.parse_program(source)?;
        debug!(lines = program.len(), "parsed program");
        run(
            program.iter().map(|(_, tree)| tree),
            &mut self.env,
            &self.interner,
        )
        .map_err(|LineError { index, error }| RunError::Eval {
            line: program[index].0,
            error,
        })
    }

    /// Parse and evaluate a single line.
    pub fn evaluate_line(&mut self, text: &str) -> Result<Outcome<V>, RunError<V::Error>> {
        let tree =
            parse_source(text, &self.interner).map_err(|error| RunError::Parse { line: 1, error })?;
        evaluate(&tree, &mut self.env, &self.interner).map_err(|error| RunError::Eval { line: 1, error })
    }
}

impl<V: Value> Default for Session<V> {
    fn default() -> Self {
        Self::new()
    }
}
