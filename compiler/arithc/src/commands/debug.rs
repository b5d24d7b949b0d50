//! Debug commands: `lex` and `parse` for inspecting each phase.

use arith_diagnostic::emitter::ColorMode;
use arith_ir::{StringInterner, TokenKind};
use arith_parse::parse_source;
use arithc::Input;

use super::{read_source, report, stderr_emitter};

/// Non-blank lines of `source` with their 1-based numbers.
fn program_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| (index + 1, text))
}

/// Print the token stream of every line.
pub fn lex_file(path: &str) {
    let source = read_source(&Input::from_arg(path));
    let interner = StringInterner::new();

    for (line, text) in program_lines(&source) {
        let tokens = arith_lexer::lex(text, &interner);
        println!("line {line} ({} tokens):", tokens.len());
        for token in &tokens {
            let description = match token.kind {
                TokenKind::Ident(name) => format!("identifier `{}`", interner.lookup(name)),
                TokenKind::Number(literal) => format!("number `{}`", interner.lookup(literal)),
                TokenKind::Error | TokenKind::Eof => token.kind.display_name().to_owned(),
                kind => format!("`{}`", kind.display_name()),
            };
            println!("  {:<8} {description}", token.span.to_string());
        }
    }
}

/// Print the parse tree of every line, reporting every line that fails.
pub fn parse_file(path: &str) {
    let source = read_source(&Input::from_arg(path));
    let interner = StringInterner::new();
    let mut emitter = stderr_emitter(ColorMode::Auto);
    let mut errors = 0;

    for (line, text) in program_lines(&source) {
        match parse_source(text, &interner) {
            Ok(tree) => {
                println!("line {line}:");
                print!("{}", tree.dump(&interner));
            }
            Err(error) => {
                errors += 1;
                report(&mut emitter, &error.to_diagnostic().on_line(line), &source);
            }
        }
    }

    emitter.emit_summary(errors);
    emitter.flush();
    if errors > 0 {
        std::process::exit(1);
    }
}
