//! gigglyc-lex - Lexical Analyzer for GigglyCode
//!
//! This crate turns GigglyCode source text into a sequence of tokens for a
//! parser to consume.
//!
//! # Example Usage
//!
//! ```
//! use gigglyc_lex::{Lexer, TokenKind};
//!
//! let lexer = Lexer::new("def add(a, b) -> a + b");
//! for token in &lexer {
//!     println!("{token}");
//! }
//!
//! assert_eq!(lexer.tokens()[0].kind, TokenKind::Def);
//! assert_eq!(lexer.tokens().last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, the keyword table and the token record
//! - [`lexer`] - the scanner
//! - [`cursor`] - character cursor with line/column tracking
//!
//! # Lexical Grammar
//!
//! Whitespace separates tokens and is otherwise ignored. There are no
//! comments.
//!
//! ## Keywords
//!
//! `is`, `and`, `or`, `not`, `def`, `return`, `if`, `else`, `elIf`, `while`,
//! `for`, `in`, `break`, `continue`, `class`, `true`, `false`, `none`.
//! Matching is case-sensitive.
//!
//! ## Literals
//!
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Integer**: `42`
//! - **Float**: digits and dots with at least one dot, e.g. `4.2`
//! - **String**: `"text"`, and raw string `'text'`; no escapes
//!
//! ## Operators
//!
//! - **Arithmetic**: `+ - * ** / \ %`
//! - **Assignment**: `= += -= *= /= \= %=`
//! - **Comparison**: `== != < > <= >=`
//! - **Bitwise**: `&& || ^ ~ << >>`
//! - **Other**: `++ -- . ...`
//!
//! ## Delimiters
//!
//! `( ) { } [ ] : ; , ->`
//!
//! Any other character becomes an [`TokenKind::Illegal`] token and an error
//! diagnostic.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};

/// Scans `source` and returns its tokens, discarding diagnostics.
///
/// # Example
///
/// ```
/// use gigglyc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x += 1");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].kind, TokenKind::PlusEq);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).into_tokens()
}
