use super::*;
use kmt_diagnostic::ErrorCode;
use kmt_ir::SourceSpan;
use pretty_assertions::assert_eq;

fn messages(result: &AnalysisResult) -> Vec<&str> {
    result.diagnostics.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn test_success_has_no_diagnostics() {
    let result = analyze("out 1 + 2 * 3");
    assert_eq!(result, AnalysisResult::succeeded("7\n".into()));
    assert!(!result.has_errors());
}

#[test]
fn test_lexer_diagnostics_are_returned_alone() {
    // `$` is a lexical error; `out q` would also fail to bind.
    let result = analyze("out $\nout q");
    assert_eq!(messages(&result), vec!["Unexpected character '$'"]);
    assert_eq!(result.output, "");
}

#[test]
fn test_parser_and_binder_diagnostics_combine() {
    let result = analyze("var = 1\nout q");
    assert_eq!(
        messages(&result),
        vec!["Expected identifier after 'var'", "Undefined variable 'q'"]
    );
    assert_eq!(result.output, "");
}

#[test]
fn test_runtime_error_is_one_diagnostic() {
    let result = analyze("out 1\nout {2, 1}\nout 3");
    assert_eq!(result.output, "");
    assert_eq!(result.diagnostics.len(), 1);
    let diag = &result.diagnostics[0];
    assert_eq!(diag.message, "Sequence start must be <= end");
    assert_eq!(diag.code, ErrorCode::E6002);
    assert_eq!(diag.span, SourceSpan::new(10, 5, 2, 5));
}

#[test]
fn test_cancelled_analysis_is_not_a_result() {
    let token = CancellationToken::new();
    token.cancel();
    let analyzer = Analyzer::default();
    assert_eq!(analyzer.analyze_cancellable("out 1", &token), Err(Cancelled));
}

#[test]
fn test_cancel_during_huge_reduce() {
    let token = CancellationToken::new();
    let remote = token.clone();
    let canceller = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(50));
        remote.cancel();
    });
    let analyzer = Analyzer::default();
    let result = analyzer.analyze_cancellable(
        "out reduce({0, 4000000000000000000}, 0, a b -> a + b)",
        &token,
    );
    canceller.join().unwrap();
    assert_eq!(result, Err(Cancelled));
}

#[test]
fn test_options_reach_the_evaluator() {
    let options = AnalysisOptions::default().with_chunk_size(0).with_threads(2);
    let analyzer = Analyzer::new(options);
    assert_eq!(analyzer.options().eval.chunk_size(), 1);
    assert_eq!(analyzer.options().eval.threads(), Some(2));
    assert_eq!(
        analyzer.analyze("out reduce({1, 10}, 0, a b -> a + b)").output,
        "55\n"
    );
}

#[test]
fn test_analyzer_is_reusable() {
    let analyzer = Analyzer::default();
    assert_eq!(analyzer.analyze("out 1").output, "1\n");
    assert_eq!(analyzer.analyze("out 2").output, "2\n");
}
