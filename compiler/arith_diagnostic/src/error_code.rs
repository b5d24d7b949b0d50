//! Error codes for all Arith diagnostics.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
/// - E9xxx: Internal errors (grammar/evaluator mismatch)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Trailing input after a complete line
    E1004,

    // Evaluation Errors (E6xxx)
    /// Unresolved variable
    E6001,
    /// Literal is not an integer
    E6002,
    /// Arithmetic failure reported by the value type
    E6003,

    // Internal Errors (E9xxx)
    /// Parse tree shape the evaluator does not support
    E9001,
}

impl ErrorCode {
    /// The code as written in diagnostics (`E1001`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description, used by `arith explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected an expression",
            ErrorCode::E1003 => "unclosed parenthesis",
            ErrorCode::E1004 => "unexpected input after the end of the line",
            ErrorCode::E6001 => "variable read before it was assigned",
            ErrorCode::E6002 => "numeric literal is not an integer",
            ErrorCode::E6003 => "arithmetic operation failed",
            ErrorCode::E9001 => "syntax the evaluator does not support",
        }
    }

    /// Parse a code string such as `E6001`.
    pub fn parse(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E9001,
    ];

    /// Whether this code signals a bug rather than a user error.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
