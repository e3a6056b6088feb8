//! String literal lexing.
//!
//! Both quote styles work the same way: everything up to the matching quote
//! is taken verbatim, newlines included. There are no escape sequences, so a
//! string cannot contain its own quote character.

use crate::token::{Token, TokenKind};
use crate::Lexer;
use gigglyc_util::DiagnosticCode;

impl<'a> Lexer<'a> {
    /// Lexes a string delimited by `quote`, producing a token of `kind`.
    ///
    /// The literal is the text between the quotes. A string with no closing
    /// quote runs to the end of the input; the token keeps everything that
    /// was read and an error is reported.
    pub(super) fn lex_string(&mut self, quote: char, kind: TokenKind) -> Token {
        self.cursor.advance();
        let content_start = self.cursor.position();

        self.cursor.eat_while(|c| c != quote);
        let content = self.cursor.slice_from(content_start).to_string();

        if !self.cursor.match_char(quote) {
            self.handler
                .build_error(self.current_span(), "unterminated string literal")
                .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
                .note(format!("the string runs to the end of the input without a closing `{quote}`"))
                .emit(&self.handler);
        }

        self.token_with_literal(kind, content)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use gigglyc_util::DiagnosticCode;

    #[test]
    fn test_double_quoted() {
        let lexer = Lexer::new("\"hello\"");
        let tokens = lexer.tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, "hello");
        assert_eq!((tokens[0].start_column, tokens[0].end_column), (1, 7));
        assert_eq!((tokens[0].start, tokens[0].end), (0, 7));
        assert!(!lexer.handler().has_errors());
    }

    #[test]
    fn test_single_quoted_is_raw() {
        let lexer = Lexer::new("'raw'");
        let token = &lexer.tokens()[0];
        assert_eq!(token.kind, TokenKind::RawString);
        assert_eq!(token.literal, "raw");
    }

    #[test]
    fn test_empty_string() {
        let lexer = Lexer::new("\"\"");
        let token = &lexer.tokens()[0];
        assert_eq!(token.literal, "");
        assert_eq!((token.start_column, token.end_column), (1, 2));
    }

    #[test]
    fn test_other_quote_and_backslash_are_plain_content() {
        let lexer = Lexer::new(r#""it's a \n""#);
        let token = &lexer.tokens()[0];
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.literal, r"it's a \n");
    }

    #[test]
    fn test_multiline_string_advances_line() {
        let lexer = Lexer::new("\"a\nbc\" x");
        let tokens = lexer.tokens();
        assert_eq!(tokens[0].literal, "a\nbc");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].start_column, 1);
        assert_eq!(tokens[0].end_column, 3);
        assert_eq!((tokens[1].line, tokens[1].start_column), (2, 5));
    }

    #[test]
    fn test_unterminated_runs_to_end() {
        let lexer = Lexer::new("x = 'abc\ndef");
        let tokens = lexer.tokens();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].kind, TokenKind::RawString);
        assert_eq!(tokens[2].literal, "abc\ndef");
        assert_eq!(tokens[2].start_column, 5);
        assert_eq!(tokens[2].end_column, 3);
        assert_eq!(tokens[3].kind, TokenKind::Eof);

        let diags = lexer.handler().diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
        assert_eq!((diags[0].span.line, diags[0].span.column), (1, 5));
    }

    #[test]
    fn test_lone_quote_at_end() {
        let lexer = Lexer::new("\"");
        let token = &lexer.tokens()[0];
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.literal, "");
        assert_eq!((token.start_column, token.end_column), (1, 1));
        assert_eq!(lexer.handler().error_count(), 1);
    }
}
