//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the human-readable line/column where
//! it starts. [`SourceFile`] turns offsets and line numbers back into text.
//!
//! # Examples
//!
//! ```
//! use gigglyc_util::span::Span;
//!
//! let span = Span::new(10, 14, 2, 3);
//! assert_eq!(span.to_string(), "2:3");
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start inclusive, end exclusive)
/// - Line and column numbers of the first character (1-based)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Placeholder for diagnostics with no source location
    ///
    /// # Examples
    ///
    /// ```
    /// use gigglyc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 8, 2, 4);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 8);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 4);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 12, 7).to_string(), "12:7");
    }
}
