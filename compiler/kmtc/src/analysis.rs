//! The analysis facade: one call from source text to output or diagnostics.

use kmt_diagnostic::Diagnostic;
use kmt_eval::{CancellationToken, EvalConfig, EvalError, Interpreter};

/// Output text, or the diagnostics that prevented producing it.
///
/// At most one of the two fields is non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisResult {
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    fn succeeded(output: String) -> Self {
        AnalysisResult {
            output,
            diagnostics: Vec::new(),
        }
    }

    fn failed(diagnostics: Vec<Diagnostic>) -> Self {
        AnalysisResult {
            output: String::new(),
            diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// The analysis was cancelled through its [`CancellationToken`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("analysis was cancelled")]
pub struct Cancelled;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub eval: EvalConfig,
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.eval = self.eval.with_chunk_size(chunk_size);
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.eval = self.eval.with_threads(threads);
        self
    }
}

/// Reusable pipeline. Keeps the evaluator's thread pool between calls.
pub struct Analyzer {
    options: AnalysisOptions,
    interpreter: Interpreter,
}

impl Analyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Analyzer {
            options,
            interpreter: Interpreter::new(options.eval),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn analyze(&self, source: &str) -> AnalysisResult {
        // A fresh token is never cancelled.
        self.analyze_cancellable(source, &CancellationToken::new())
            .unwrap_or_default()
    }

    /// Run every stage on `source`.
    ///
    /// - Lexer diagnostics, if any, are returned alone.
    /// - Otherwise parser and binder diagnostics together, if any.
    /// - Otherwise the program runs: its output, or exactly one runtime
    ///   diagnostic.
    ///
    /// Returns `Err(Cancelled)` if `cancel` fires before the result is ready.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn analyze_cancellable(
        &self,
        source: &str,
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult, Cancelled> {
        check(cancel)?;
        let lexed = kmt_lexer::lex(source);
        if !lexed.diagnostics.is_empty() {
            tracing::debug!(count = lexed.diagnostics.len(), "stopped after lexing");
            return Ok(AnalysisResult::failed(lexed.diagnostics));
        }

        check(cancel)?;
        let parsed = kmt_parse::parse(&lexed.tokens);
        let bound = kmt_types::bind(&parsed.program);
        let mut diagnostics = parsed.diagnostics;
        diagnostics.extend(bound.diagnostics);
        if !diagnostics.is_empty() {
            tracing::debug!(count = diagnostics.len(), "stopped after binding");
            return Ok(AnalysisResult::failed(diagnostics));
        }

        match self.interpreter.evaluate_cancellable(&bound.program, cancel) {
            Ok(evaluated) => Ok(AnalysisResult::succeeded(evaluated.output)),
            Err(EvalError::Runtime(err)) => {
                tracing::debug!(code = %err.code(), "runtime error");
                Ok(AnalysisResult::failed(vec![err.to_diagnostic()]))
            }
            Err(EvalError::Cancelled) => Err(Cancelled),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(AnalysisOptions::default())
    }
}

fn check(cancel: &CancellationToken) -> Result<(), Cancelled> {
    if cancel.is_cancelled() {
        Err(Cancelled)
    } else {
        Ok(())
    }
}

/// Analyze `source` with default options.
pub fn analyze(source: &str) -> AnalysisResult {
    Analyzer::default().analyze(source)
}

#[cfg(test)]
mod tests;
