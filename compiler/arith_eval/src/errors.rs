//! Evaluation errors.
//!
//! Every error aborts the line being evaluated. `E` is the value type's own
//! arithmetic error, carried through without reinterpretation.

use arith_diagnostic::{Diagnostic, ErrorCode};
use arith_ir::Span;

/// Failure while evaluating one line.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError<E> {
    /// A variable was read before any line assigned it.
    #[error("unresolved variable `{name}`")]
    UnresolvedVariable { name: String, span: Span },

    /// The tree has a shape the evaluator has no semantics for.
    #[error("unsupported {rule}: {detail}")]
    UnsupportedConstruct {
        rule: &'static str,
        detail: String,
        span: Span,
    },

    /// A numeric literal that is not an `i64`.
    #[error("literal `{text}` is not an integer")]
    InvalidLiteral { text: String, span: Span },

    /// The value type's arithmetic failed.
    #[error("{error}")]
    Arithmetic { error: E, span: Span },
}

impl<E> EvalError<E> {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnresolvedVariable { .. } => ErrorCode::E6001,
            EvalError::InvalidLiteral { .. } => ErrorCode::E6002,
            EvalError::Arithmetic { .. } => ErrorCode::E6003,
            EvalError::UnsupportedConstruct { .. } => ErrorCode::E9001,
        }
    }

    /// Where in the line the failure happened.
    pub fn span(&self) -> Span {
        match self {
            EvalError::UnresolvedVariable { span, .. }
            | EvalError::UnsupportedConstruct { span, .. }
            | EvalError::InvalidLiteral { span, .. }
            | EvalError::Arithmetic { span, .. } => *span,
        }
    }

    /// The value type's error, if that is what failed.
    pub fn arithmetic(&self) -> Option<&E> {
        match self {
            EvalError::Arithmetic { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl<E: std::fmt::Display> EvalError<E> {
    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::UnresolvedVariable { name, span } => diag
                .with_label(*span, "not assigned on an earlier line")
                .with_note(format!("assign `{name}` before reading it")),
            EvalError::UnsupportedConstruct { span, .. } => diag
                .with_label(*span, "")
                .with_note("the grammar accepts this but the evaluator has no meaning for it"),
            EvalError::InvalidLiteral { span, .. } => diag
                .with_label(*span, "")
                .with_note("only integer literals are evaluated"),
            EvalError::Arithmetic { span, .. } => diag.with_label(*span, "in this operation"),
        }
    }
}

/// Error for a node whose children don't match its rule.
pub(crate) fn unsupported<E>(rule: &'static str, detail: impl Into<String>, span: Span) -> EvalError<E> {
    EvalError::UnsupportedConstruct {
        rule,
        detail: detail.into(),
        span,
    }
}
