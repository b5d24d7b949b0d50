//! Command handlers for the Arith CLI.
//!
//! Shared helpers for reading program text and reporting diagnostics live
//! here in the module root.

use std::io::{IsTerminal, Read};

use arith_diagnostic::emitter::{ColorMode, TerminalEmitter};
use arith_diagnostic::Diagnostic;
use arithc::Input;

mod debug;
mod explain;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::run_program;

/// Read the whole program, exiting with a message on failure.
pub(super) fn read_source(input: &Input) -> String {
    let result = match input {
        Input::Stdin => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).map(|_| text)
        }
        Input::File(path) => std::fs::read_to_string(path),
    };
    match result {
        Ok(content) => content,
        Err(e) => {
            let path = match input {
                Input::Stdin => "<stdin>".to_owned(),
                Input::File(path) => path.display().to_string(),
            };
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

pub(super) fn stderr_emitter(mode: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(mode, std::io::stderr().is_terminal())
}

/// Emit `diagnostic` against its line of `source`.
pub(super) fn report(
    emitter: &mut TerminalEmitter<std::io::Stderr>,
    diagnostic: &Diagnostic,
    source: &str,
) {
    let text = diagnostic
        .line
        .and_then(|line| source.lines().nth(line.saturating_sub(1)));
    emitter.emit(diagnostic, text);
}
