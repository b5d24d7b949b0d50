//! The `arith` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn arith(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_arith"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start arith");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write program");
    child.wait_with_output().expect("arith did not finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_run_prints_result() {
    let output = arith(&["run", "-"], "a = 2\na = a * 2\nreturn a\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "4\n");
}

#[test]
fn test_run_float_mode() {
    let output = arith(&["run", "-", "--float"], "return 7 / 2\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3.5\n");
}

#[test]
fn test_run_with_bindings_and_env() {
    let output = arith(
        &["run", "-", "--set", "b=3", "--set=c=b+1", "--env"],
        "a = 2 * b\n",
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "a = 6\nb = 3\nc = 4\n");
}

#[test]
fn test_run_error_renders_diagnostic() {
    let output = arith(&["run", "-", "--color=never"], "a = 1\nb = a + c\n");
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output),
        "\
error[E6001]: unresolved variable `c`
 --> line 2:9
  |
2 | b = a + c
  |         ^ not assigned on an earlier line
  = note: assign `c` before reading it

error: aborting due to 1 previous error
"
    );
}

#[test]
fn test_bad_binding_is_reported() {
    let output = arith(&["run", "-", "--set", "b=x", "--color=never"], "return b\n");
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.starts_with("error[E6001]: unresolved variable `x`"), "{err}");
    assert!(err.contains("note: in `--set b=x`"), "{err}");
}

#[test]
fn test_parse_command_dumps_trees() {
    let output = arith(&["parse", "-"], "return 1\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
line 1:
equation 0..8
  `return` 0..6
  expression 7..8
    term 7..8
      factor 7..8
        signedAtom 7..8
          atom 7..8
            scientific `1` 7..8
"
    );
}

#[test]
fn test_lex_command() {
    let output = arith(&["lex", "-"], "a = 1\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
line 1 (4 tokens):
  0..1     identifier `a`
  2..3     `=`
  4..5     number `1`
  5..5     end of line
"
    );
}

#[test]
fn test_explain() {
    let output = arith(&["explain", "E6001"], "");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("E6001: "));

    let output = arith(&["explain", "E4242"], "");
    assert!(!output.status.success());
}

#[test]
fn test_unknown_command() {
    let output = arith(&["frobnicate"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("Unknown command: frobnicate"));
}
