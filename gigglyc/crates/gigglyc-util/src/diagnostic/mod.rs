//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Compiler stages never abort on bad input. They describe the problem as a
//! [`Diagnostic`], push it into a [`Handler`], and keep going; the caller
//! decides afterwards what to do with what was collected.
//!
//! # Examples
//!
//! ```
//! use gigglyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use gigglyc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("numeric literal has more than one '.'")
//!     .code(DiagnosticCode::W_LEXER_MULTIPLE_DOTS)
//!     .span(Span::new(0, 5, 1, 1))
//!     .emit(&handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use gigglyc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error in the input
    Error,
    /// Suspicious input that is still accepted
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic against the file it was reported in
    ///
    /// The location line names the file, and the span's line is quoted
    /// from `file` with carets under the offending text.
    ///
    /// # Examples
    ///
    /// ```
    /// use gigglyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    /// use gigglyc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.gc", "x = $");
    /// let diag = DiagnosticBuilder::error("unexpected character '$'")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .span(Span::new(4, 5, 1, 5))
    ///     .build();
    ///
    /// let rendered = diag.render(&file);
    /// assert!(rendered.starts_with("error[E1001]: unexpected character '$'\n  --> main.gc:1:5\n"));
    /// assert!(rendered.ends_with("    |     ^"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = self.header();
        if self.span != Span::DUMMY {
            out.push_str(&format!("\n  --> {}:{}", file.name(), self.span));
            if let Some(snippet) = file.snippet(self.span) {
                out.push('\n');
                out.push_str(&snippet.format());
            }
        }
        self.push_trailer(&mut out);
        out
    }

    fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }

    fn push_trailer(&self, out: &mut String) {
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {note}"));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {help}"));
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = self.header();
        if self.span != Span::DUMMY {
            out.push_str(&format!("\n  --> {}", self.span));
        }
        self.push_trailer(&mut out);
        f.write_str(&out)
    }
}

/// Handler for collecting diagnostics
///
/// Uses interior mutability so a stage can report through a shared
/// reference while it is borrowed elsewhere.
///
/// # Examples
///
/// ```
/// use gigglyc_util::diagnostic::Handler;
/// use gigglyc_util::span::Span;
///
/// let handler = Handler::new();
/// handler
///     .build_error(Span::new(0, 1, 1, 1), "unexpected character '$'")
///     .emit(&handler);
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Start an error at `span`; finish it with [`DiagnosticBuilder::emit`]
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Start a warning at `span`; finish it with [`DiagnosticBuilder::emit`]
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics, in the order they were reported
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(message: &str, span: Span) -> Diagnostic {
        DiagnosticBuilder::error(message).span(span).build()
    }

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = DiagnosticBuilder::error("unexpected character '!'")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(Span::new(4, 5, 2, 3))
            .help("use `not` for logical negation")
            .build();
        assert_eq!(
            diag.to_string(),
            "error[E1001]: unexpected character '!'\n  --> 2:3\n  = help: use `not` for logical negation"
        );
    }

    #[test]
    fn test_diagnostic_display_without_span_or_code() {
        let diag = DiagnosticBuilder::warning("something odd").build();
        assert_eq!(diag.to_string(), "warning: something odd");
    }

    #[test]
    fn test_render_quotes_source_line() {
        let file = SourceFile::new("demo.gc", "a = 1\nb = a | 2\n");
        let diag = DiagnosticBuilder::error("unexpected character '|'")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(Span::new(12, 13, 2, 7))
            .build();
        assert_eq!(
            diag.render(&file),
            "error[E1001]: unexpected character '|'\n  --> demo.gc:2:7\n  2 | b = a | 2\n    |       ^"
        );
    }

    #[test]
    fn test_render_note_follows_snippet() {
        let file = SourceFile::new("demo.gc", "s = 'abc");
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .span(Span::new(4, 8, 1, 5))
            .note("no closing quote")
            .build();
        assert_eq!(
            diag.render(&file),
            "error[E1002]: unterminated string literal\n  --> demo.gc:1:5\n  1 | s = 'abc\n    |     ^^^^\n  = note: no closing quote"
        );
    }

    #[test]
    fn test_render_line_outside_file_skips_snippet() {
        let file = SourceFile::new("demo.gc", "x");
        let diag = error("lost", Span::new(0, 1, 9, 1));
        assert_eq!(diag.render(&file), "error: lost\n  --> demo.gc:9:1");
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit_diagnostic(DiagnosticBuilder::warning("w").build());
        assert!(!handler.has_errors());
        handler.emit_diagnostic(error("e", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_build_error() {
        let handler = Handler::new();
        handler
            .build_error(Span::new(0, 1, 1, 1), "unexpected character '@'")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diags[0].span.column, 1);
    }

    #[test]
    fn test_handler_build_warning() {
        let handler = Handler::new();
        handler
            .build_warning(Span::DUMMY, "more than one dot")
            .emit(&handler);
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
    }
}
