//! Operator lexing.
//!
//! Each method is entered with the cursor on the operator's first character
//! and picks the longest operator that matches.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `+=`, `++` or `+`.
    pub(super) fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::PlusEq
        } else if self.cursor.match_char('+') {
            TokenKind::Increment
        } else {
            TokenKind::Plus
        };
        self.make_token(kind)
    }

    /// Lexes `-=`, `--`, `->` or `-`.
    pub(super) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::MinusEq
        } else if self.cursor.match_char('-') {
            TokenKind::Decrement
        } else if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        };
        self.make_token(kind)
    }

    /// Lexes `**`, `*=` or `*`.
    pub(super) fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('*') {
            TokenKind::StarStar
        } else if self.cursor.match_char('=') {
            TokenKind::StarEq
        } else {
            TokenKind::Star
        };
        self.make_token(kind)
    }

    /// Lexes `%=` or `%`.
    pub(super) fn lex_percent(&mut self) -> Token {
        self.with_optional_eq(TokenKind::PercentEq, TokenKind::Percent)
    }

    /// Lexes `/=` or `/`.
    pub(super) fn lex_slash(&mut self) -> Token {
        self.with_optional_eq(TokenKind::SlashEq, TokenKind::Slash)
    }

    /// Lexes `\=` or `\`.
    pub(super) fn lex_backslash(&mut self) -> Token {
        self.with_optional_eq(TokenKind::BackslashEq, TokenKind::Backslash)
    }

    /// Lexes `==` or `=`.
    pub(super) fn lex_equals(&mut self) -> Token {
        self.with_optional_eq(TokenKind::Eq, TokenKind::Assign)
    }

    /// Lexes `...` or `.`.
    ///
    /// Two dots are not an operator: `..` is two `Dot` tokens.
    pub(super) fn lex_dot(&mut self) -> Token {
        if self.cursor.peek_char(1) == '.' && self.cursor.peek_char(2) == '.' {
            self.cursor.advance();
            self.cursor.advance();
            self.cursor.advance();
            self.make_token(TokenKind::Ellipsis)
        } else {
            self.cursor.advance();
            self.make_token(TokenKind::Dot)
        }
    }

    /// Lexes `!=`; a lone `!` is illegal.
    pub(super) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::NotEq)
        } else {
            self.illegal(Some("use `not` for logical negation, or `!=` for inequality"))
        }
    }

    /// Lexes `<=`, `<<` or `<`.
    pub(super) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else if self.cursor.match_char('<') {
            TokenKind::Shl
        } else {
            TokenKind::Lt
        };
        self.make_token(kind)
    }

    /// Lexes `>=`, `>>` or `>`.
    pub(super) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else if self.cursor.match_char('>') {
            TokenKind::Shr
        } else {
            TokenKind::Gt
        };
        self.make_token(kind)
    }

    /// Lexes `&&`; a lone `&` is illegal.
    pub(super) fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.make_token(TokenKind::BitAnd)
        } else {
            self.illegal(Some("use `and` for logical and, or `&&` for bitwise and"))
        }
    }

    /// Lexes `||`; a lone `|` is illegal.
    pub(super) fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.make_token(TokenKind::BitOr)
        } else {
            self.illegal(Some("use `or` for logical or, or `||` for bitwise or"))
        }
    }

    fn with_optional_eq(&mut self, with_eq: TokenKind, alone: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            with_eq
        } else {
            alone
        };
        self.make_token(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    /// Kinds of every token before `Eof`.
    fn lex_ops(source: &str) -> Vec<TokenKind> {
        let lexer = Lexer::new(source);
        let tokens = lexer.tokens();
        tokens[..tokens.len() - 1].iter().map(|t| t.kind).collect()
    }

    fn lex_op(source: &str) -> TokenKind {
        let kinds = lex_ops(source);
        assert_eq!(kinds.len(), 1, "{source:?} lexed as {kinds:?}");
        kinds[0]
    }

    #[test]
    fn test_plus_family() {
        assert_eq!(lex_op("+"), TokenKind::Plus);
        assert_eq!(lex_op("+="), TokenKind::PlusEq);
        assert_eq!(lex_op("++"), TokenKind::Increment);
        assert_eq!(lex_ops("+ ="), [TokenKind::Plus, TokenKind::Assign]);
        assert_eq!(lex_ops("+++"), [TokenKind::Increment, TokenKind::Plus]);
    }

    #[test]
    fn test_minus_family() {
        assert_eq!(lex_op("-"), TokenKind::Minus);
        assert_eq!(lex_op("-="), TokenKind::MinusEq);
        assert_eq!(lex_op("--"), TokenKind::Decrement);
        assert_eq!(lex_op("->"), TokenKind::Arrow);
        assert_eq!(lex_ops("-->"), [TokenKind::Decrement, TokenKind::Gt]);
    }

    #[test]
    fn test_star_family() {
        assert_eq!(lex_op("*"), TokenKind::Star);
        assert_eq!(lex_op("*="), TokenKind::StarEq);
        assert_eq!(lex_op("**"), TokenKind::StarStar);
        assert_eq!(lex_ops("**="), [TokenKind::StarStar, TokenKind::Assign]);
    }

    #[test]
    fn test_slash_percent_backslash() {
        assert_eq!(lex_op("/"), TokenKind::Slash);
        assert_eq!(lex_op("/="), TokenKind::SlashEq);
        assert_eq!(lex_op("%"), TokenKind::Percent);
        assert_eq!(lex_op("%="), TokenKind::PercentEq);
        assert_eq!(lex_op("\\"), TokenKind::Backslash);
        assert_eq!(lex_op("\\="), TokenKind::BackslashEq);
        assert_eq!(lex_ops("//"), [TokenKind::Slash, TokenKind::Slash]);
    }

    #[test]
    fn test_equals() {
        assert_eq!(lex_op("="), TokenKind::Assign);
        assert_eq!(lex_op("=="), TokenKind::Eq);
        assert_eq!(lex_ops("==="), [TokenKind::Eq, TokenKind::Assign]);
    }

    #[test]
    fn test_comparison_and_shifts() {
        assert_eq!(lex_op("<"), TokenKind::Lt);
        assert_eq!(lex_op("<="), TokenKind::LtEq);
        assert_eq!(lex_op("<<"), TokenKind::Shl);
        assert_eq!(lex_op(">"), TokenKind::Gt);
        assert_eq!(lex_op(">="), TokenKind::GtEq);
        assert_eq!(lex_op(">>"), TokenKind::Shr);
        assert_eq!(lex_ops("<<="), [TokenKind::Shl, TokenKind::Assign]);
    }

    #[test]
    fn test_dots() {
        assert_eq!(lex_op("."), TokenKind::Dot);
        assert_eq!(lex_op("..."), TokenKind::Ellipsis);
        assert_eq!(lex_ops(".."), [TokenKind::Dot, TokenKind::Dot]);
        assert_eq!(lex_ops("...."), [TokenKind::Ellipsis, TokenKind::Dot]);
        assert_eq!(lex_ops(". .."), [TokenKind::Dot, TokenKind::Dot, TokenKind::Dot]);
    }

    #[test]
    fn test_ellipsis_columns() {
        let lexer = Lexer::new("a...");
        let ellipsis = &lexer.tokens()[1];
        assert_eq!(ellipsis.literal, "...");
        assert_eq!((ellipsis.start_column, ellipsis.end_column), (2, 4));
    }

    #[test]
    fn test_bang() {
        assert_eq!(lex_op("!="), TokenKind::NotEq);
        assert_eq!(lex_op("!"), TokenKind::Illegal);
        assert_eq!(lex_ops("! ="), [TokenKind::Illegal, TokenKind::Assign]);
    }

    #[test]
    fn test_lone_bitwise_chars_are_illegal_with_help() {
        for source in ["!", "&", "|"] {
            let lexer = Lexer::new(source);
            let tokens = lexer.tokens();
            assert_eq!(tokens[0].kind, TokenKind::Illegal);
            assert_eq!(tokens[0].literal, source);
            assert_eq!(tokens[1].kind, TokenKind::Eof);

            let diags = lexer.handler().diagnostics();
            assert_eq!(diags.len(), 1);
            assert_eq!(diags[0].helps.len(), 1, "{source}");
        }
    }

    #[test]
    fn test_double_bitwise() {
        assert_eq!(lex_op("&&"), TokenKind::BitAnd);
        assert_eq!(lex_op("||"), TokenKind::BitOr);
        assert_eq!(lex_ops("&&&"), [TokenKind::BitAnd, TokenKind::Illegal]);
    }

    #[test]
    fn test_two_char_operator_columns() {
        let lexer = Lexer::new("x += 1");
        let op = &lexer.tokens()[1];
        assert_eq!(op.literal, "+=");
        assert_eq!((op.line, op.start_column, op.end_column), (1, 3, 4));
        assert_eq!((op.start, op.end), (2, 4));
    }
}
