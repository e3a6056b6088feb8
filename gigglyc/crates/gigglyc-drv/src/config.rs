//! Configuration for the gigglyc driver.
//!
//! Settings come from a `gigglyc.toml` file:
//!
//! ```toml
//! [lexer]
//! debug = true                     # print the token dump
//!
//! [dev]
//! enabled = false                  # developer mode
//! input = "test/testscipt.gc"      # used when --file is not given
//! output = "dump/lexer_output"     # used when --output is not given
//! ```

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "gigglyc.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Developer-mode settings.
    #[serde(default)]
    pub dev: DevConfig,
}

/// Lexer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Print every token after scanning.
    #[serde(default)]
    pub debug: bool,
}

/// Developer mode: fixed input and output paths for quick iteration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DevConfig {
    /// Whether developer mode is on.
    #[serde(default)]
    pub enabled: bool,

    /// Source file scanned when no `--file` is given.
    #[serde(default = "default_dev_input")]
    pub input: PathBuf,

    /// Token dump destination when no `--output` is given.
    #[serde(default = "default_dev_output")]
    pub output: PathBuf,
}

fn default_dev_input() -> PathBuf {
    PathBuf::from("test/testscipt.gc")
}

fn default_dev_output() -> PathBuf {
    PathBuf::from("dump/lexer_output")
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            input: default_dev_input(),
            output: default_dev_output(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for `gigglyc.toml` in the following order:
    /// 1. Current directory
    /// 2. `~/.config/gigglyc/`
    /// 3. The platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DriverError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("gigglyc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("gigglyc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
