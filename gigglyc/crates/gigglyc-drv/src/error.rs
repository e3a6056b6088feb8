//! Error types for the gigglyc driver.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the driver.
///
/// Lexical problems in the input are not errors at this level; they are
/// reported as diagnostics, and only become [`DriverError::LexicalErrors`]
/// when the caller asks for that.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No input file was given and developer mode is off.
    #[error("No input file: pass --file <PATH> or enable [dev] mode in gigglyc.toml")]
    MissingInput,

    /// The source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The token dump could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Scanning reported errors and the caller asked to fail on them.
    #[error("Lexing failed with {0} error(s)")]
    LexicalErrors(usize),

    /// Any other I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
