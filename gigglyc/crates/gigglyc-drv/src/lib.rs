//! gigglyc-drv - Driver for the GigglyCode lexer
//!
//! Reads a `.gc` source file, scans it with [`gigglyc_lex`], logs the
//! diagnostics and optionally dumps the token stream. The `gigglyc` binary
//! is a thin command-line shell around [`session::run`].

pub mod config;
pub mod error;
pub mod session;

pub use config::{Config, DevConfig, LexerConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};
pub use session::{run, Options, Summary};
