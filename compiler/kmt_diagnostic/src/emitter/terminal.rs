//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and a
//! source snippet under each diagnostic when the source is known.

use std::io::{self, Write};

use kmt_ir::SourceSpan;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// `1 error`, `2 errors`.
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Closing line for a batch of diagnostics, or `None` when there were none.
///
/// The severity is the worst one reported and picks the line's colour.
pub(crate) fn summary_line(errors: usize, warnings: usize) -> Option<(Severity, String)> {
    match (errors, warnings) {
        (0, 0) => None,
        (0, w) => Some((Severity::Warning, counted(w, "warning"))),
        (e, 0) => Some((Severity::Error, format!("stopped after {}", counted(e, "error")))),
        (e, w) => Some((
            Severity::Error,
            format!(
                "stopped after {} and {}",
                counted(e, "error"),
                counted(w, "warning")
            ),
        )),
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<&'src str>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is consulted only for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render a snippet of `source` under each diagnostic.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(source);
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        self.write_colored(&severity.to_string(), severity_color(severity));
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Gutter, source line and carets under the span.
    ///
    /// Spans running past the end of their line are underlined to the end
    /// of that line; zero-length spans get a single caret.
    fn write_snippet(&mut self, span: SourceSpan, severity: Severity) {
        let Some(source) = self.source else {
            return;
        };
        let Some(line_text) = source.split('\n').nth(span.line.saturating_sub(1) as usize) else {
            return;
        };
        let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);

        let number = span.line.to_string();
        let pad = " ".repeat(number.len());
        let indent = span.column.saturating_sub(1) as usize;

        let covered = source
            .get(span.to_range())
            .map_or(0, |text| text.split('\n').next().map_or(0, |t| t.chars().count()));
        let width = covered.max(1);

        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{number} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {line_text}");
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(indent));
        self.write_colored(&"^".repeat(width), severity_color(severity));
        let _ = writeln!(self.writer);
    }
}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // error[E2001]: message
        //   --> line:column (stage)
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let _ = write!(self.writer, "  ");
        self.write_colored("-->", colors::GUTTER);
        let _ = writeln!(
            self.writer,
            " {} ({})",
            diagnostic.span,
            diagnostic.code.stage()
        );

        self.write_snippet(diagnostic.span, diagnostic.severity);
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let Some((severity, text)) = summary_line(error_count, warning_count) else {
            return;
        };
        self.write_severity(severity);
        let _ = writeln!(self.writer, ": {text}");
    }
}
