//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers are ASCII letters, digits and `_`, not starting with a
    /// digit. The text is then checked against the keyword table.
    pub(super) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
