//! Whole-pipeline programs.

use kmtc::{ErrorCode, Severity, SourceSpan};
use pretty_assertions::assert_eq;

use crate::common::{analyze, messages, run_ok};

#[test]
fn arithmetic_precedence() {
    assert_eq!(run_ok("out 1 + 2 * 3"), "7\n");
}

#[test]
fn map_doubles_each_element() {
    assert_eq!(
        run_ok("var seq = map({1, 3}, i -> i * 2)\nout seq"),
        "{2, 4, 6}\n"
    );
}

#[test]
fn reduce_sums() {
    assert_eq!(run_ok("out reduce({1, 3}, 0, x y -> x + y)"), "6\n");
}

#[test]
fn division_in_reduce_is_real() {
    assert_eq!(run_ok("out reduce({1, 2}, 1, x y -> x / y)"), "0.5\n");
}

#[test]
fn lambda_cannot_see_globals() {
    let result = analyze("var n = 2\nvar seq = map({1, 2}, i -> i + n)\nout seq");
    assert_eq!(result.output, "");
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.diagnostics[0].message.contains("Undefined variable"));
}

#[test]
fn real_sequence_bounds_are_rejected() {
    let result = analyze("out {1.2, 3}");
    assert_eq!(result.output, "");
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message.contains("Sequence bounds must be integers")));
}

#[test]
fn pi_approximation() {
    let source = "\
var n = 500
var sequence = map({0, n}, i -> (-1)^i / (2 * i + 1))
var pi = 4 * reduce(sequence, 0, x y -> x + y)
print \"pi = \"
out pi
";
    let output = run_ok(source);
    let value: f64 = output
        .strip_prefix("pi = ")
        .unwrap()
        .trim_end()
        .parse()
        .unwrap();
    assert!((value - std::f64::consts::PI).abs() < 0.01, "got {value}");
}

#[test]
fn print_and_out_interleave_in_order() {
    assert_eq!(
        run_ok("print \"a\"\nout 1\nprint \"b\\n\"\nout {1, 2}"),
        "a1\nb\n{1, 2}\n"
    );
}

#[test]
fn equal_bounds_give_single_element() {
    assert_eq!(run_ok("out {4, 4}"), "{4}\n");
}

#[test]
fn start_after_end_is_a_runtime_error() {
    let result = analyze("out 1\nout {5, 1}");
    assert_eq!(result.output, "");
    assert_eq!(result.diagnostics.len(), 1);
    let diag = &result.diagnostics[0];
    assert_eq!(diag.message, "Sequence start must be <= end");
    assert_eq!(diag.code, ErrorCode::E6002);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.span, SourceSpan::new(10, 5, 2, 5));
}

#[test]
fn long_sequences_are_elided() {
    assert_eq!(
        run_ok("out {1, 100}"),
        "{1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, ..., 100}\n"
    );
}

#[test]
fn lexer_errors_are_reported_alone() {
    // The undefined `q` would be a binder error, but lexing already failed.
    assert_eq!(messages("out q\nout #"), vec!["Unexpected character '#'"]);
}

#[test]
fn parser_and_binder_errors_are_combined() {
    let found = messages("out (1 + 2\nout q");
    assert_eq!(found.len(), 2, "{found:?}");
    assert!(found[1].contains("Undefined variable 'q'"));
}

#[test]
fn no_output_alongside_front_end_errors() {
    let result = analyze("print \"before\"\nout q");
    assert_eq!(result.output, "");
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn large_parallel_reduce() {
    assert_eq!(
        run_ok("out reduce(map({1, 200000}, i -> i * 2), 0, a b -> a + b)"),
        "40000200000\n"
    );
}

#[test]
fn empty_source_is_fine() {
    assert_eq!(run_ok(""), "");
}
