//! Number literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;
use gigglyc_util::DiagnosticCode;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal.
    ///
    /// Digits and dots are consumed together; any dot makes the literal a
    /// `Float`. A literal such as `1.2.3` is still accepted as one `Float`,
    /// with a warning.
    pub(super) fn lex_number(&mut self) -> Token {
        let mut dots = 0usize;
        self.cursor.eat_while(|c| {
            if c == '.' {
                dots += 1;
            }
            c.is_ascii_digit() || c == '.'
        });

        let kind = if dots == 0 {
            TokenKind::Integer
        } else {
            TokenKind::Float
        };
        let token = self.make_token(kind);

        if dots > 1 {
            self.handler
                .build_warning(
                    self.current_span(),
                    format!("numeric literal `{}` has {dots} decimal points", token.literal),
                )
                .code(DiagnosticCode::W_LEXER_MULTIPLE_DOTS)
                .note("it is read as a single float literal")
                .emit(&self.handler);
        }
        token
    }
}
