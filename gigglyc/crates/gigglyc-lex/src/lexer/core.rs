//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the eager scan loop and the
//! dispatch on the first character of each lexeme.

use gigglyc_util::{DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the GigglyCode language.
///
/// The whole source is scanned when the lexer is constructed. The result is
/// a token sequence that always ends with exactly one [`TokenKind::Eof`],
/// plus any diagnostics reported along the way. Bad input never stops the
/// scan; it shows up as [`TokenKind::Illegal`] tokens and diagnostics.
///
/// # Example
///
/// ```
/// use gigglyc_lex::{Lexer, TokenKind};
///
/// let lexer = Lexer::new("x == 1");
/// let kinds: Vec<_> = lexer.tokens().iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Eq, TokenKind::Integer, TokenKind::Eof]
/// );
/// assert!(!lexer.handler().has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Diagnostics reported while scanning.
    pub(super) handler: Handler,

    /// Tokens produced so far.
    tokens: Vec<Token>,

    /// Byte offset where the current token starts.
    pub(super) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Scans `source` to the end.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            cursor: Cursor::new(source),
            handler: Handler::new(),
            tokens: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        };

        loop {
            let token = lexer.next_token();
            trace!(%token, "token");
            let done = token.is_eof();
            lexer.tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            bytes = source.len(),
            tokens = lexer.tokens.len(),
            errors = lexer.handler.error_count(),
            warnings = lexer.handler.warning_count(),
            "scanned source"
        );
        lexer
    }

    /// Recognizes the lexeme at the cursor and returns its token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token.
    fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.eof();
        }

        match self.cursor.current_char() {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '^' => self.single(TokenKind::Caret),
            '~' => self.single(TokenKind::Tilde),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '%' => self.lex_percent(),
            '/' => self.lex_slash(),
            '\\' => self.lex_backslash(),
            '=' => self.lex_equals(),
            '.' => self.lex_dot(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '"' => self.lex_string('"', TokenKind::String),
            '\'' => self.lex_string('\'', TokenKind::RawString),
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.lex_identifier(),
            _ => {
                self.cursor.advance();
                self.illegal(None)
            }
        }
    }

    /// Consumes one character and returns a token of `kind` for it.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Builds a token whose literal is the source text consumed since the
    /// token started.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token {
        let literal = self.cursor.slice_from(self.token_start).to_string();
        self.token_with_literal(kind, literal)
    }

    /// Builds a token covering the consumed text, with an explicit literal.
    pub(super) fn token_with_literal(&self, kind: TokenKind, literal: String) -> Token {
        Token {
            kind,
            literal,
            line: self.token_start_line,
            start_column: self.token_start_column,
            end_column: self.cursor.last_column(),
            start: self.token_start,
            end: self.cursor.position(),
        }
    }

    fn eof(&self) -> Token {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
            line: self.token_start_line,
            start_column: self.token_start_column,
            end_column: self.token_start_column,
            start: self.token_start,
            end: self.token_start,
        }
    }

    /// Reports the consumed text as an unexpected character and returns an
    /// `Illegal` token for it.
    pub(super) fn illegal(&self, help: Option<&str>) -> Token {
        let token = self.make_token(TokenKind::Illegal);
        let mut diagnostic = self
            .handler
            .build_error(
                self.current_span(),
                format!("unexpected character '{}'", token.literal.escape_debug()),
            )
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
        if let Some(help) = help {
            diagnostic = diagnostic.help(help);
        }
        diagnostic.emit(&self.handler);
        token
    }

    /// Span from the start of the current token to the cursor.
    pub(super) fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// All tokens, ending with `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Diagnostics reported while scanning.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Splits the lexer into its tokens and diagnostics.
    pub fn into_parts(self) -> (Vec<Token>, Handler) {
        (self.tokens, self.handler)
    }

    /// Consumes the lexer, keeping only the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl<'l, 'a> IntoIterator for &'l Lexer<'a> {
    type Item = &'l Token;
    type IntoIter = std::slice::Iter<'l, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
