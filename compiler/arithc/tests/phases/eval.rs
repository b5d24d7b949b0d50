//! Running programs through a session.

use arith_diagnostic::ErrorCode;
use arith_eval::{EvalError, Matrix, MatrixError};
use arithc::{RunError, Session};
use pretty_assertions::assert_eq;

#[test]
fn test_program_with_every_operator() {
    let mut session = Session::<i64>::new();
    let source = "\
a = 6 / 2
b = a * 4 - 2
c = (a + b) * (b - a)
return c / 7
";
    assert_eq!(session.run_source(source), Ok(Some(13)));
    assert_eq!(session.get("b"), Some(&10));
    assert_eq!(session.get("c"), Some(&91));
}

#[test]
fn test_seeded_variable() {
    let mut session = Session::<i64>::new();
    session.bind("b", 3);
    assert_eq!(session.run_source("a = 2 * b\nreturn a"), Ok(Some(6)));
}

#[test]
fn test_matrix_program() {
    let mut session = Session::<Matrix>::new();
    session.bind("b", Matrix::from_rows(&[[1.0, 3.0], [2.0, 4.0]]).unwrap());
    let result = session.run_source("a = 2 * b\nreturn a + 1").unwrap().unwrap();
    assert_eq!(
        result,
        Matrix::from_rows(&[[3.0, 7.0], [5.0, 9.0]]).unwrap()
    );
    assert_eq!(result.to_string(), "[[3, 7], [5, 9]]");
}

#[test]
fn test_matrix_shape_mismatch() {
    let mut session = Session::<Matrix>::new();
    session.bind("a", Matrix::from_rows(&[[1.0, 2.0]]).unwrap());
    session.bind("b", Matrix::from_rows(&[[1.0], [2.0]]).unwrap());
    let err = session.run_source("return a + b").unwrap_err();
    let RunError::Eval { line, error } = &err else {
        panic!("{err:?}");
    };
    assert_eq!(*line, 1);
    assert!(matches!(
        error.arithmetic(),
        Some(MatrixError::ShapeMismatch { .. })
    ));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E6003);
}

#[test]
fn test_unsupported_constructs_report_internal_code() {
    for source in ["return -1", "return 2 ^ 3", "1 + a = 2"] {
        let mut session = Session::<i64>::new();
        let err = session.run_source(source).unwrap_err();
        assert!(
            matches!(err, RunError::Eval { error: EvalError::UnsupportedConstruct { .. }, .. }),
            "{source}: {err:?}"
        );
        assert_eq!(err.to_diagnostic().code, ErrorCode::E9001);
    }
}

#[test]
fn test_overflow_is_an_error() {
    let mut session = Session::<i64>::new();
    let err = session
        .run_source("a = 9223372036854775807\nreturn a + 1")
        .unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(err.to_string(), "line 2: integer overflow in addition");
}
