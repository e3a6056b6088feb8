//! A single driver run: read one source file, scan it, report.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use gigglyc_lex::{Lexer, Token};
use gigglyc_util::{Handler, Level, SourceFile};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{DriverError, Result};

/// Settings for one run, after command-line flags and configuration have
/// been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Source file to scan.
    pub input: PathBuf,
    /// Where to write the token dump; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Whether to write the token dump at all.
    pub dump_tokens: bool,
    /// Whether lexical errors fail the run.
    pub deny_errors: bool,
}

impl Options {
    /// Merges command-line values with `config`.
    ///
    /// Command-line values win. In developer mode a missing input or output
    /// falls back to the configured paths. The dump is written when asked
    /// for on the command line, when `lexer.debug` is set, or when an
    /// output path was given explicitly.
    pub fn resolve(
        file: Option<PathBuf>,
        output: Option<PathBuf>,
        dump_tokens: bool,
        deny_errors: bool,
        config: &Config,
    ) -> Result<Self> {
        let explicit_output = output.is_some();
        let dev = config.dev.enabled.then_some(&config.dev);

        let input = file
            .or_else(|| dev.map(|dev| dev.input.clone()))
            .ok_or(DriverError::MissingInput)?;
        let output = output.or_else(|| dev.map(|dev| dev.output.clone()));

        Ok(Self {
            input,
            output,
            dump_tokens: dump_tokens || config.lexer.debug || explicit_output,
            deny_errors,
        })
    }
}

/// Counts from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Tokens produced, `Eof` included.
    pub tokens: usize,
    /// Error diagnostics reported.
    pub errors: usize,
    /// Warning diagnostics reported.
    pub warnings: usize,
}

/// Runs the driver once.
///
/// Diagnostics are logged with a quote of the offending source line. With
/// `deny_errors` set, any lexical error turns into
/// [`DriverError::LexicalErrors`] after the dump has been written.
pub fn run(options: &Options) -> Result<Summary> {
    let file = read_source(&options.input)?;
    debug!(file = file.name(), lines = file.line_count(), "read source");

    let (tokens, handler) = Lexer::new(file.content()).into_parts();
    report_diagnostics(&file, &handler);

    if options.dump_tokens {
        match &options.output {
            Some(path) => write_dump_file(path, &tokens)?,
            None => {
                let stdout = io::stdout();
                write_dump(&mut stdout.lock(), &tokens)?;
            }
        }
    }

    let summary = Summary {
        tokens: tokens.len(),
        errors: handler.error_count(),
        warnings: handler.warning_count(),
    };
    info!(
        file = file.name(),
        tokens = summary.tokens,
        errors = summary.errors,
        warnings = summary.warnings,
        "lexing finished"
    );

    if options.deny_errors && summary.errors > 0 {
        return Err(DriverError::LexicalErrors(summary.errors));
    }
    Ok(summary)
}

fn read_source(path: &Path) -> Result<SourceFile> {
    let content = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Logs every diagnostic in `handler`, rendered against `file`.
pub fn report_diagnostics(file: &SourceFile, handler: &Handler) {
    for diagnostic in handler.diagnostics() {
        let rendered = diagnostic.render(file);
        match diagnostic.level {
            Level::Error => error!("{rendered}"),
            Level::Warning => warn!("{rendered}"),
        }
    }
}

/// Writes one line per token.
pub fn write_dump(writer: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(writer, "{token}")?;
    }
    writer.flush()
}

fn write_dump_file(path: &Path, tokens: &[Token]) -> Result<()> {
    let write_error = |source: io::Error| DriverError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let file = fs::File::create(path).map_err(write_error)?;
    write_dump(&mut BufWriter::new(file), tokens).map_err(write_error)?;

    debug!(path = %path.display(), tokens = tokens.len(), "wrote token dump");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DevConfig, LexerConfig};
    use tempfile::TempDir;

    fn dev_config() -> Config {
        Config {
            lexer: LexerConfig::default(),
            dev: DevConfig {
                enabled: true,
                input: PathBuf::from("dev/in.gc"),
                output: PathBuf::from("dev/out.txt"),
            },
        }
    }

    #[test]
    fn test_resolve_requires_input_without_dev_mode() {
        let result = Options::resolve(None, None, false, false, &Config::default());
        assert!(matches!(result, Err(DriverError::MissingInput)));
    }

    #[test]
    fn test_resolve_dev_mode_fallbacks() {
        let options = Options::resolve(None, None, false, false, &dev_config()).unwrap();
        assert_eq!(options.input, PathBuf::from("dev/in.gc"));
        assert_eq!(options.output, Some(PathBuf::from("dev/out.txt")));
        assert!(!options.dump_tokens);
    }

    #[test]
    fn test_resolve_cli_overrides_dev_mode() {
        let options = Options::resolve(
            Some(PathBuf::from("main.gc")),
            Some(PathBuf::from("tokens.txt")),
            false,
            true,
            &dev_config(),
        )
        .unwrap();
        assert_eq!(options.input, PathBuf::from("main.gc"));
        assert_eq!(options.output, Some(PathBuf::from("tokens.txt")));
        assert!(options.dump_tokens);
        assert!(options.deny_errors);
    }

    #[test]
    fn test_resolve_lexer_debug_enables_dump() {
        let mut config = Config::default();
        config.lexer.debug = true;
        let options =
            Options::resolve(Some(PathBuf::from("a.gc")), None, false, false, &config).unwrap();
        assert!(options.dump_tokens);
        assert_eq!(options.output, None);
    }

    #[test]
    fn test_write_dump_lines() {
        let tokens = gigglyc_lex::tokenize("x = 1");
        let mut out = Vec::new();
        write_dump(&mut out, &tokens).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Identifier \"x\" 1:1-1\nAssign \"=\" 1:3-3\nInteger \"1\" 1:5-5\nEof \"\" 1:6-6\n"
        );
    }

    #[test]
    fn test_run_writes_dump_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("main.gc");
        let output = dir.path().join("dump").join("lexer_output");
        fs::write(&input, "def f() { return 4.2; }\n").unwrap();

        let options = Options {
            input,
            output: Some(output.clone()),
            dump_tokens: true,
            deny_errors: false,
        };
        let summary = run(&options).unwrap();
        assert_eq!(summary.tokens, 10);
        assert_eq!(summary.errors, 0);

        let dump = fs::read_to_string(output).unwrap();
        assert_eq!(dump.lines().count(), 10);
        assert!(dump.starts_with("Def \"def\" 1:1-3\n"));
        assert!(dump.contains("Float \"4.2\" 1:18-20\n"));
    }

    #[test]
    fn test_run_counts_errors_and_respects_deny() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bad.gc");
        fs::write(&input, "a ! b\ns = \"open").unwrap();

        let mut options = Options {
            input,
            output: None,
            dump_tokens: false,
            deny_errors: false,
        };
        let summary = run(&options).unwrap();
        assert_eq!(summary.errors, 2);

        options.deny_errors = true;
        assert!(matches!(run(&options), Err(DriverError::LexicalErrors(2))));
    }

    #[test]
    fn test_run_missing_file() {
        let options = Options {
            input: PathBuf::from("/nonexistent/input.gc"),
            output: None,
            dump_tokens: false,
            deny_errors: false,
        };
        assert!(matches!(run(&options), Err(DriverError::Read { .. })));
    }
}
