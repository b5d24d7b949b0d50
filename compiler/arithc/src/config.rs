//! Options for the `run` command.
//!
//! Parsed by hand from the argument list, the same way the rest of the CLI
//! is.

use std::path::PathBuf;

use arith_diagnostic::emitter::ColorMode;

/// Where the program text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` is standard input; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }
}

/// Value type a program is evaluated with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumericMode {
    /// Checked `i64`; division truncates.
    #[default]
    Integer,
    /// `f64`; division is real-valued.
    Float,
}

/// Error in the `run` command's arguments.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing input file (use `-` for standard input)")]
    MissingInput,
    #[error("unexpected extra input `{0}`")]
    ExtraInput(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),
    #[error("invalid binding `{0}`, expected `name=expression`")]
    InvalidBinding(String),
    #[error("invalid color mode `{0}`, expected auto, always or never")]
    InvalidColor(String),
}

/// Everything `arith run` was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub input: Input,
    pub mode: NumericMode,
    /// `--set name=expression` pairs, applied in order before the program.
    pub bindings: Vec<(String, String)>,
    /// Print the final environment after the run.
    pub show_env: bool,
    pub color: ColorMode,
}

impl RunConfig {
    /// Parse the arguments following `run`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let mut input = None;
        let mut mode = NumericMode::default();
        let mut bindings = Vec::new();
        let mut show_env = false;
        let mut color = ColorMode::Auto;

        let mut args = args.iter().map(AsRef::as_ref);
        while let Some(arg) = args.next() {
            if arg == "--float" || arg == "-f" {
                mode = NumericMode::Float;
            } else if arg == "--env" {
                show_env = true;
            } else if arg == "--set" {
                let binding = args.next().ok_or(ConfigError::MissingValue("--set"))?;
                bindings.push(parse_binding(binding)?);
            } else if let Some(binding) = arg.strip_prefix("--set=") {
                bindings.push(parse_binding(binding)?);
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = parse_color(value)?;
            } else if arg.starts_with('-') && arg != "-" {
                return Err(ConfigError::UnknownOption(arg.to_owned()));
            } else if input.is_none() {
                input = Some(Input::from_arg(arg));
            } else {
                return Err(ConfigError::ExtraInput(arg.to_owned()));
            }
        }

        Ok(RunConfig {
            input: input.ok_or(ConfigError::MissingInput)?,
            mode,
            bindings,
            show_env,
            color,
        })
    }
}

fn parse_binding(text: &str) -> Result<(String, String), ConfigError> {
    match text.split_once('=') {
        Some((name, expr)) if is_identifier(name.trim()) && !expr.trim().is_empty() => {
            Ok((name.trim().to_owned(), expr.trim().to_owned()))
        }
        _ => Err(ConfigError::InvalidBinding(text.to_owned())),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "return"
}

/// Parse a `--color` value.
fn parse_color(value: &str) -> Result<ColorMode, ConfigError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(ConfigError::InvalidColor(value.to_owned())),
    }
}
