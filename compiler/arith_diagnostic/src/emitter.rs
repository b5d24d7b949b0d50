//! Terminal emitter.
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! Diagnostics refer to a single program line, so the snippet is always the
//! one line the caller hands in.
//!
//! ```text
//! error[E6001]: unresolved variable `b`
//!  --> line 2:5
//!   |
//! 2 | a = b * 2
//!   |     ^ not assigned on an earlier line
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a TTY.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit one diagnostic, rendering `source_line` under its header.
    pub fn emit(&mut self, diagnostic: &Diagnostic, source_line: Option<&str>) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let line_label = diagnostic
            .line
            .map_or_else(String::new, |n| n.to_string());
        let pad = " ".repeat(line_label.len().max(1));

        if let Some(span) = diagnostic.primary_span() {
            let column = span.start + 1;
            match diagnostic.line {
                Some(n) => {
                    let _ = writeln!(self.writer, "{pad}--> line {n}:{column}");
                }
                None => {
                    let _ = writeln!(self.writer, "{pad}--> column {column}");
                }
            }
        }

        if let Some(text) = source_line {
            let number = if line_label.is_empty() {
                pad.clone()
            } else {
                line_label.clone()
            };
            let _ = writeln!(self.writer, "{pad} |");
            let _ = writeln!(self.writer, "{number} | {text}");
            for label in &diagnostic.labels {
                self.write_label(&pad, label);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{pad} = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn write_label(&mut self, pad: &str, label: &Label) {
        let indent = " ".repeat(label.span.start as usize);
        let width = (label.span.len() as usize).max(1);
        let (mark, color) = if label.is_primary {
            ('^', colors::ERROR)
        } else {
            ('-', colors::SECONDARY)
        };
        let marks: String = std::iter::repeat(mark).take(width).collect();
        let _ = write!(self.writer, "{pad} | {indent}");
        if label.message.is_empty() {
            self.write_colored(&marks, color);
        } else {
            self.write_colored(&format!("{marks} {}", label.message), color);
        }
        let _ = writeln!(self.writer);
    }

    /// Emit the trailing "could not run" summary.
    pub fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let plural = if error_count == 1 { "" } else { "s" };
        let _ = writeln!(
            self.writer,
            ": aborting due to {error_count} previous error{plural}"
        );
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
