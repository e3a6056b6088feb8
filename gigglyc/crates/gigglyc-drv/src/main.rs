//! gigglyc - command-line entry point.
//!
//! Parses arguments with clap, sets up tracing, loads `gigglyc.toml` and
//! hands over to [`gigglyc_drv::run`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gigglyc_drv::{Config, DriverError, Options};

/// gigglyc - lexer for the GigglyCode language
///
/// Scans a GigglyCode source file, reports lexical errors with the line
/// they occur on, and can dump the resulting tokens.
#[derive(Parser, Debug)]
#[command(name = "gigglyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexer for the GigglyCode language", long_about = None)]
struct Cli {
    /// Source file to scan
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Write the token dump to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", env = "GIGGLYC_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "GIGGLYC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "GIGGLYC_NO_COLOR")]
    no_color: bool,

    /// Print every token, regardless of configuration
    #[arg(long)]
    dump_tokens: bool,

    /// Exit with an error status if the source has lexical errors
    #[arg(long)]
    deny_errors: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("could not load configuration")?;
    let options = Options::resolve(
        cli.file,
        cli.output,
        cli.dump_tokens,
        cli.deny_errors,
        &config,
    )?;

    gigglyc_drv::run(&options)
        .with_context(|| format!("while lexing {}", options.input.display()))?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so a token dump on stdout stays clean. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> gigglyc_drv::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> gigglyc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
