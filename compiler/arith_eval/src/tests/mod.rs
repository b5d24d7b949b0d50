//! Whole-program tests: lexing, parsing and evaluation together.


use arith_ir::{ParseTree, StringInterner};
use arith_parse::parse_source;

/// Parse each non-blank line of `source`.
fn parse_program(source: &str, interner: &StringInterner) -> Vec<ParseTree> {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_source(line, interner).unwrap_or_else(|e| panic!("{line:?}: {e}")))
        .collect()
}
