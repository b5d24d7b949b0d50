//! Parsing whole programs through a session.

use arith_diagnostic::ErrorCode;
use arith_ir::NodeKind;
use arithc::{RunError, Session};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_program_keeps_line_numbers() {
    let session = Session::<i64>::new();
    let program = session
        .parse_program("a = 2\n\n   \nreturn a\n")
        .unwrap();
    let lines: Vec<usize> = program.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![1, 4]);
    for (_, tree) in &program {
        assert_eq!(tree.kind(tree.root()), NodeKind::Equation);
    }
}

#[test]
fn test_first_parse_error_wins() {
    let session = Session::<i64>::new();
    let err = session.parse_program("a = 1\na 2\nb = $").unwrap_err();
    match err {
        RunError::Parse { line, error } => {
            assert_eq!(line, 2);
            assert_eq!(error.code, ErrorCode::E1001);
            assert_eq!(error.message, "expected `=`, found `number`");
        }
        RunError::Eval { .. } => panic!("expected a parse error"),
    }
}

#[test]
fn test_parse_error_codes() {
    let session = Session::<i64>::new();
    let cases = [
        ("a = 1 # 2", ErrorCode::E0001),
        ("a = 1 +", ErrorCode::E1002),
        ("return (1", ErrorCode::E1003),
        ("return 1 2", ErrorCode::E1004),
    ];
    for (source, code) in cases {
        match session.parse_program(source) {
            Err(RunError::Parse { error, .. }) => assert_eq!(error.code, code, "{source}"),
            other => panic!("{source}: {other:?}"),
        }
    }
}

#[test]
fn test_dump_shows_grammar_rules() {
    let session = Session::<i64>::new();
    let program = session.parse_program("x = y").unwrap();
    let dump = program[0].1.dump(session.interner());
    assert_eq!(
        dump,
        "\
equation 0..5
  expression 0..1
    term 0..1
      factor 0..1
        signedAtom 0..1
          atom 0..1
            variable `x` 0..1
  `=` 2..3
  expression 4..5
    term 4..5
      factor 4..5
        signedAtom 4..5
          atom 4..5
            variable `y` 4..5
"
    );
}
