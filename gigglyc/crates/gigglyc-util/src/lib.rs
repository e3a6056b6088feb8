//! gigglyc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the GigglyCode compiler crates:
//!
//! - [`span`] - byte/line/column locations and source files with line lookup
//! - [`diagnostic`] - errors and warnings collected while compiling
//! - [`error`] - error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use gigglyc_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, Span};
//!
//! let file = SourceFile::new("main.gc", "x = 1\ny = !\n");
//! let handler = Handler::new();
//!
//! DiagnosticBuilder::error("unexpected character '!'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(10, 11, 2, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(file.line_at(2), Some("y = !"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
