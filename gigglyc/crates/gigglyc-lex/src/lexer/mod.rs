//! Lexer module.
//!
//! The implementation is split by the kind of lexeme being recognized:
//! - `core` - the `Lexer` struct, the scan loop and first-character dispatch
//! - `identifier` - identifiers and keywords
//! - `number` - integer and float literals
//! - `string` - double- and single-quoted strings
//! - `operator` - operators that need lookahead

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
