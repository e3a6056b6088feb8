//! Character cursor for traversing source code.
//!
//! The cursor keeps the current byte position together with the line and
//! column of the character under it. It only ever moves forward; lookahead
//! through [`Cursor::peek_char`] never changes its state.

/// A forward-only cursor over source text.
///
/// Positions are byte offsets, so multi-byte characters are stepped over
/// whole. Lines and columns are 1-based and count characters.
///
/// # Example
///
/// ```
/// use gigglyc_lex::Cursor;
///
/// let mut cursor = Cursor::new("x = 42");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
    /// Column of the most recently consumed character.
    last_column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            last_column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    ///
    /// A literal NUL in the source also reads as `'\0'`; use
    /// [`Cursor::is_at_end`] to tell the two apart.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current),
    /// or `'\0'` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use gigglyc_lex::Cursor;
    ///
    /// let cursor = Cursor::new("a..");
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.rest();
        // ASCII fast path: byte offset equals char offset while all bytes
        // up to `offset` are single-byte.
        if let Some(prefix) = rest.as_bytes().get(..=offset) {
            if prefix.is_ascii() {
                return prefix[offset] as char;
            }
        }
        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes the current character, updating line and column.
    ///
    /// Does nothing at the end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.rest().chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        self.last_column = self.column;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use gigglyc_lex::Cursor;
    ///
    /// let mut cursor = Cursor::new("+=");
    /// cursor.advance();
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Skips whitespace, newlines included.
    ///
    /// The ASCII information separators `\x1C`..=`\x1F` count as
    /// whitespace too.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line of the character under the cursor (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the character under the cursor (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Column of the character consumed last.
    ///
    /// Before anything has been consumed this is 1.
    #[inline]
    pub fn last_column(&self) -> u32 {
        self.last_column
    }

    /// The source text from byte offset `start` up to the cursor.
    ///
    /// `start` must be a position this cursor has been at.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or_default()
    }

    fn rest(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or_default()
    }
}

/// Whitespace as the scanner sees it: Unicode whitespace plus the ASCII
/// file, group, record and unit separators.
#[inline]
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}
