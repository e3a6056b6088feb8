//! Source files and line lookup.
//!
//! [`SourceFile`] keeps the text of one input together with the byte offset
//! of every line start, so diagnostics can quote the offending line.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use gigglyc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.gc", "def main() {}");
/// assert_eq!(file.name(), "main.gc");
/// assert_eq!(file.content(), "def main() {}");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A file always has at least one (possibly empty) line, and a trailing
    /// newline opens one more.
    ///
    /// # Examples
    ///
    /// ```
    /// use gigglyc_util::span::SourceFile;
    ///
    /// assert_eq!(SourceFile::new("a.gc", "line1\nline2\nline3").line_count(), 3);
    /// assert_eq!(SourceFile::new("b.gc", "").line_count(), 1);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use gigglyc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.gc", "line1\r\nline2");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use gigglyc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.gc", "def main() {}");
    /// assert_eq!(file.extract_range(4, 8).unwrap(), "main");
    /// assert!(file.extract_range(8, 4).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { start, end });
        }

        Ok(&self.content[start..end])
    }

    /// Build a snippet quoting the first line a span covers
    ///
    /// Carets stop at the end of that line, so a span running across
    /// several lines is underlined only on its first one. Returns `None`
    /// when the span's line is outside the file.
    pub fn snippet(&self, span: Span) -> Option<SourceSnippet> {
        let line = self.line_at(span.line as usize)?;
        let start_column = span.column.max(1) as usize;

        let width = self
            .extract_range(span.start, span.end)
            .ok()
            .and_then(|text| text.split('\n').next())
            .map_or(0, |first| first.trim_end_matches('\r').chars().count());
        let end_column = start_column + width.max(1) - 1;

        Some(SourceSnippet::new(
            line,
            span.line as usize,
            start_column,
            end_column,
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_line_start() {
        let file = SourceFile::new("test.gc", "line1\nline2\nline3");
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.line_start(1), Some(6));
        assert_eq!(file.line_start(2), Some(12));
        assert_eq!(file.line_start(3), None);
    }

    #[test]
    fn test_trailing_newline_opens_line() {
        let file = SourceFile::new("test.gc", "x\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line_at(2), Some(""));
    }

    #[test]
    fn test_extract_range_errors() {
        let file = SourceFile::new("test.gc", "é");
        assert!(matches!(
            file.extract_range(0, 10),
            Err(SourceMapError::SpanOutOfBounds { .. })
        ));
        assert!(matches!(
            file.extract_range(1, 2),
            Err(SourceMapError::NotCharBoundary { .. })
        ));
    }

    #[test]
    fn test_snippet_single_line() {
        let file = SourceFile::new("test.gc", "x = 1\ny == !\n");
        let snippet = file.snippet(Span::new(11, 12, 2, 6)).unwrap();
        assert_eq!(snippet.line, "y == !");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 6);
        assert_eq!(snippet.end_column, 6);
    }

    #[test]
    fn test_snippet_multi_line_span_stops_at_line_end() {
        let file = SourceFile::new("test.gc", "s = \"ab\ncd");
        let snippet = file.snippet(Span::new(4, 10, 1, 5)).unwrap();
        assert_eq!(snippet.line, "s = \"ab");
        assert_eq!(snippet.start_column, 5);
        assert_eq!(snippet.end_column, 7);
    }

    #[test]
    fn test_snippet_out_of_range_line() {
        let file = SourceFile::new("test.gc", "x");
        assert!(file.snippet(Span::new(0, 1, 4, 1)).is_none());
    }
}
