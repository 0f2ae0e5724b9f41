//! Shared helpers for phase tests.

use kmtc::{AnalysisOptions, AnalysisResult, Analyzer};

/// Analyze with default options.
pub fn analyze(source: &str) -> AnalysisResult {
    kmtc::analyze(source)
}

/// Analyze with a specific chunk size.
pub fn analyze_chunked(source: &str, chunk_size: usize) -> AnalysisResult {
    Analyzer::new(AnalysisOptions::default().with_chunk_size(chunk_size)).analyze(source)
}

/// Run a program that must succeed and return its output.
#[track_caller]
pub fn run_ok(source: &str) -> String {
    let result = analyze(source);
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        result.diagnostics
    );
    result.output
}

/// Messages of every diagnostic reported for `source`.
pub fn messages(source: &str) -> Vec<String> {
    analyze(source)
        .diagnostics
        .into_iter()
        .map(|d| d.message)
        .collect()
}
