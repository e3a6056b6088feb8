//! Token definitions for the GigglyCode lexer.
//!
//! A [`Token`] is produced once per lexeme and never changes afterwards. Its
//! [`TokenKind`] comes from a closed set; the lexeme text itself lives in
//! [`Token::literal`].

use std::fmt;

use gigglyc_util::Span;

/// The category of a token.
///
/// # Example
///
/// ```
/// use gigglyc_lex::TokenKind;
///
/// assert_eq!(TokenKind::StarStar.text(), Some("**"));
/// assert_eq!(TokenKind::ElIf.text(), Some("elIf"));
/// assert_eq!(TokenKind::Identifier.text(), None);
/// assert!(TokenKind::While.is_keyword());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Sentinels =====
    /// End of input
    Eof,
    /// A character that starts no token
    Illegal,

    // ===== Comparison =====
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,

    // ===== Literals =====
    /// Identifier
    Identifier,
    /// Integer literal
    Integer,
    /// Float literal (any numeric literal containing `.`)
    Float,
    /// Double-quoted string
    String,
    /// Single-quoted string
    RawString,

    // ===== Assignment =====
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `%=`
    PercentEq,
    /// `/=`
    SlashEq,
    /// `\=`
    BackslashEq,
    /// `=`
    Assign,
    /// `is`
    Is,

    // ===== Increment / decrement =====
    /// `++`
    Increment,
    /// `--`
    Decrement,

    // ===== Bitwise =====
    /// `&&`
    BitAnd,
    /// `||`
    BitOr,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `<<`
    Shl,
    /// `>>`
    Shr,

    // ===== Arithmetic / member access =====
    /// `.`
    Dot,
    /// `...`
    Ellipsis,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `%`
    Percent,
    /// `**`
    StarStar,
    /// `/`
    Slash,
    /// `\`
    Backslash,

    // ===== Structural =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `->`
    Arrow,
    /// `,`
    Comma,

    // ===== Keywords =====
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `def`
    Def,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `elIf`
    ElIf,
    /// `while`
    While,
    /// `for`
    For,
    /// `in`
    In,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `class`
    Class,
    /// `true`
    True,
    /// `false`
    False,
    /// `none`
    None,
}

impl TokenKind {
    /// The kind's name, as used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "Eof",
            TokenKind::Illegal => "Illegal",
            TokenKind::Eq => "Eq",
            TokenKind::NotEq => "NotEq",
            TokenKind::Lt => "Lt",
            TokenKind::Gt => "Gt",
            TokenKind::LtEq => "LtEq",
            TokenKind::GtEq => "GtEq",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::RawString => "RawString",
            TokenKind::PlusEq => "PlusEq",
            TokenKind::MinusEq => "MinusEq",
            TokenKind::StarEq => "StarEq",
            TokenKind::PercentEq => "PercentEq",
            TokenKind::SlashEq => "SlashEq",
            TokenKind::BackslashEq => "BackslashEq",
            TokenKind::Assign => "Assign",
            TokenKind::Is => "Is",
            TokenKind::Increment => "Increment",
            TokenKind::Decrement => "Decrement",
            TokenKind::BitAnd => "BitAnd",
            TokenKind::BitOr => "BitOr",
            TokenKind::Caret => "Caret",
            TokenKind::Tilde => "Tilde",
            TokenKind::Shl => "Shl",
            TokenKind::Shr => "Shr",
            TokenKind::Dot => "Dot",
            TokenKind::Ellipsis => "Ellipsis",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Percent => "Percent",
            TokenKind::StarStar => "StarStar",
            TokenKind::Slash => "Slash",
            TokenKind::Backslash => "Backslash",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Arrow => "Arrow",
            TokenKind::Comma => "Comma",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::Def => "Def",
            TokenKind::Return => "Return",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::ElIf => "ElIf",
            TokenKind::While => "While",
            TokenKind::For => "For",
            TokenKind::In => "In",
            TokenKind::Break => "Break",
            TokenKind::Continue => "Continue",
            TokenKind::Class => "Class",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::None => "None",
        }
    }

    /// The fixed source text of this kind, if it has one.
    ///
    /// Sentinels and literal kinds return `None`, since their text varies.
    pub const fn text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Eof
            | TokenKind::Illegal
            | TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::RawString => return Option::None,
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::PercentEq => "%=",
            TokenKind::SlashEq => "/=",
            TokenKind::BackslashEq => "\\=",
            TokenKind::Assign => "=",
            TokenKind::Is => "is",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::BitAnd => "&&",
            TokenKind::BitOr => "||",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            TokenKind::StarStar => "**",
            TokenKind::Slash => "/",
            TokenKind::Backslash => "\\",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Arrow => "->",
            TokenKind::Comma => ",",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Def => "def",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::ElIf => "elIf",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Class => "class",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::None => "none",
        };
        Some(text)
    }

    /// Returns true for kinds produced from the keyword table, `is` included.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Is
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::Def
                | TokenKind::Return
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::ElIf
                | TokenKind::While
                | TokenKind::For
                | TokenKind::In
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Class
                | TokenKind::True
                | TokenKind::False
                | TokenKind::None
        )
    }

    /// Returns true for identifiers and numeric or string literals.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::RawString
        )
    }

    /// Returns true for symbolic operators (not delimiters or keywords).
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
                | TokenKind::PlusEq
                | TokenKind::MinusEq
                | TokenKind::StarEq
                | TokenKind::PercentEq
                | TokenKind::SlashEq
                | TokenKind::BackslashEq
                | TokenKind::Assign
                | TokenKind::Increment
                | TokenKind::Decrement
                | TokenKind::BitAnd
                | TokenKind::BitOr
                | TokenKind::Caret
                | TokenKind::Tilde
                | TokenKind::Shl
                | TokenKind::Shr
                | TokenKind::Dot
                | TokenKind::Ellipsis
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Percent
                | TokenKind::StarStar
                | TokenKind::Slash
                | TokenKind::Backslash
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up an identifier in the keyword table.
///
/// The match is exact and case-sensitive, so `elIf` is a keyword while
/// `elif` and `True` are plain identifiers.
///
/// # Example
///
/// ```
/// use gigglyc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("elIf"), Some(TokenKind::ElIf));
/// assert_eq!(keyword_from_ident("elif"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "is" => TokenKind::Is,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "def" => TokenKind::Def,
        "return" => TokenKind::Return,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "elIf" => TokenKind::ElIf,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "in" => TokenKind::In,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "class" => TokenKind::Class,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "none" => TokenKind::None,
        _ => return Option::None,
    };
    Some(kind)
}

/// One lexeme, as recognized by the lexer.
///
/// Columns are 1-based and inclusive: a one-character token has
/// `start_column == end_column`. `start` and `end` are byte offsets into the
/// source, end exclusive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Source text of the lexeme (string contents without their quotes)
    pub literal: String,
    /// Line the lexeme starts on (1-based)
    pub line: u32,
    /// Column of the first character
    pub start_column: u32,
    /// Column of the last character
    pub end_column: u32,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset just past the last character
    pub end: usize,
}

impl Token {
    /// The token's location as a [`Span`].
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end, self.line, self.start_column)
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Renders `Kind "literal" line:start-end`, e.g. `Identifier "x" 2:1-1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} {}:{}-{}",
            self.kind, self.literal, self.line, self.start_column, self.end_column
        )
    }
}
