// Test code uses unwrap for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used)]

//! Driver tests: the loop is run over in-memory input and its output
//! compared line by line.

use std::io::Cursor;

use lispy_eval::{ErrorKind, Value};
use lispyc::{eval_line, run_eval, run_parse, run_repl, ReplConfig, ReplStats};
use pretty_assertions::assert_eq;

struct Session {
    out: String,
    err: String,
    stats: ReplStats,
}

fn session(config: &ReplConfig, input: &str) -> Session {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let stats = run_repl(config, Cursor::new(input), &mut out, &mut err).unwrap();
    Session {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        stats,
    }
}

fn quiet(input: &str) -> Session {
    session(&ReplConfig::quiet(), input)
}

#[test]
fn test_one_result_line_per_input_line() {
    let s = quiet("(+ 1 2)\n+ 1 2.5\n(/ 1 0)\n");
    assert_eq!(s.out, " 3\n 3.500000\n Division by zero.\n");
    assert_eq!(s.err, "");
    assert_eq!(
        s.stats,
        ReplStats {
            evaluated: 3,
            rejected: 0,
        }
    );
}

#[test]
fn test_error_values_are_results_not_diagnostics() {
    let s = quiet("(foo 1 2)\n(+ 1 99999999999999999999)\n");
    assert_eq!(s.out, " Invalid operator.\n Invalid number.\n");
    assert_eq!(s.err, "");
}

#[test]
fn test_blank_lines_are_skipped() {
    let s = quiet("\n   \n(* 2 3)\n\n");
    assert_eq!(s.out, " 6\n");
    assert_eq!(s.stats.evaluated, 1);
}

#[test]
fn test_last_line_without_newline() {
    let s = quiet("(- 5)");
    assert_eq!(s.out, " -5\n");
}

#[test]
fn test_crlf_line_endings() {
    let s = quiet("(+ 1 2)\r\n(* 2 2)\r\n");
    assert_eq!(s.out, " 3\n 4\n");
}

#[test]
fn test_parse_errors_go_to_stderr_and_loop_continues() {
    let s = quiet("(+ 1\n(+ 1 1)\n");
    assert_eq!(s.out, " 2\n");
    assert!(s.err.contains("expected `)`, found end of input"), "{}", s.err);
    assert_eq!(
        s.stats,
        ReplStats {
            evaluated: 1,
            rejected: 1,
        }
    );
}

#[test]
fn test_lines_are_independent() {
    // An error on one line has no effect on the next.
    let s = quiet("(/ 1 0)\n(+ 1 1)\n");
    assert_eq!(s.out, " Division by zero.\n 2\n");
}

#[test]
fn test_banner_and_prompt() {
    let config = ReplConfig {
        color: false,
        ..ReplConfig::default()
    };
    let s = session(&config, "(+ 1 2)\n");
    let banner = format!(
        "Lispy version {}\nPress Ctrl+C to exit\n\n",
        env!("CARGO_PKG_VERSION")
    );
    assert_eq!(s.out, format!("{banner}>  3\n> "));
}

#[test]
fn test_empty_input_prints_only_banner() {
    let config = ReplConfig {
        prompt: "$ ".to_string(),
        banner: vec!["hello".to_string()],
        color: false,
    };
    let s = session(&config, "");
    assert_eq!(s.out, "hello\n$ ");
    assert_eq!(s.stats, ReplStats::default());
}

#[test]
fn test_eval_line() {
    assert_eq!(eval_line("(^ 2 10)").unwrap(), Value::Int(1024));
    assert_eq!(
        eval_line("% 5 2.0").unwrap(),
        Value::Error(ErrorKind::UnknownOperator)
    );
    assert!(eval_line("(1 2)").is_err());
}

#[test]
fn test_run_eval() {
    let config = ReplConfig::quiet();
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(run_eval(&config, "max 1 9 3", &mut out, &mut err).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), " 9\n");
    assert!(err.is_empty());

    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(!run_eval(&config, "(+ 1 #)", &mut out, &mut err).unwrap());
    assert!(out.is_empty());
    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("unexpected character `#`"), "{err}");
}

#[test]
fn test_run_parse_prints_outline() {
    let config = ReplConfig::quiet();
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(run_parse(&config, "(- 5)", &mut out, &mut err).unwrap());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "root @0..5\n  open '(' @0..1\n  operator '-' @1..2\n  number '5' @3..4\n  close ')' @4..5\n"
    );
}

fn deeply_nested(depth: usize) -> String {
    format!("{}1{}", "(+ 1 ".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_deep_line_evaluates_and_is_released() {
    let depth = 100_000;
    let expected = i64::try_from(depth).unwrap() + 1;
    assert_eq!(eval_line(&deeply_nested(depth)).unwrap(), Value::Int(expected));

    let s = quiet(&format!("{}\n(+ 1 1)\n", deeply_nested(depth)));
    assert_eq!(s.out, format!(" {expected}\n 2\n"));
}

#[test]
fn test_deep_line_outline() {
    let depth = 100_000;
    let config = ReplConfig::quiet();
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert!(run_parse(&config, &deeply_nested(depth), &mut out, &mut err).unwrap());
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().count(), depth * 5 + 1);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("root @0..600001"));
    assert_eq!(lines.next(), Some("  open '(' @0..1"));
}
