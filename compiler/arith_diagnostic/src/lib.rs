//! Diagnostic system for Arith.
//!
//! Every phase reports failures as a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary [`Label`] saying where, within one source line
//! - optional notes
//!
//! The [`emitter::TerminalEmitter`] renders a diagnostic against the text of
//! the line it refers to.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
