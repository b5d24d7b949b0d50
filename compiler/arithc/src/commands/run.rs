//! The `run` command: evaluate a program and print its result.

use std::fmt;

use arith_eval::Value;
use arithc::{NumericMode, RunConfig, RunError, Session};

use super::{read_source, report, stderr_emitter};

/// Run a program described by the arguments after `run`.
pub fn run_program(args: &[String]) {
    let config = match RunConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: arith run <file|-> [--float] [--set name=expr]... [--env]");
            std::process::exit(1);
        }
    };

    let source = read_source(&config.input);
    let succeeded = match config.mode {
        NumericMode::Integer => run_with::<i64>(&config, &source),
        NumericMode::Float => run_with::<f64>(&config, &source),
    };
    if !succeeded {
        std::process::exit(1);
    }
}

fn run_with<V: Value + fmt::Display>(config: &RunConfig, source: &str) -> bool {
    let mut session = Session::<V>::new();
    let mut emitter = stderr_emitter(config.color);

    for (name, expr) in &config.bindings {
        let line = format!("{name} = {expr}");
        if let Err(err) = session.evaluate_line(&line) {
            // Bindings are not program lines; render against the binding text.
            let diagnostic = match err {
                RunError::Parse { error, .. } => error.to_diagnostic(),
                RunError::Eval { error, .. } => error.to_diagnostic(),
            }
            .with_note(format!("in `--set {name}={expr}`"));
            emitter.emit(&diagnostic, Some(&line));
            emitter.emit_summary(1);
            emitter.flush();
            return false;
        }
    }

    let succeeded = match session.run_source(source) {
        Ok(Some(value)) => {
            println!("{value}");
            true
        }
        Ok(None) => true,
        Err(err) => {
            report(&mut emitter, &err.to_diagnostic(), source);
            emitter.emit_summary(1);
            emitter.flush();
            false
        }
    };

    if config.show_env {
        for (name, value) in session.bindings() {
            println!("{name} = {value}");
        }
    }
    succeeded
}
