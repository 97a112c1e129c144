//! Configuration module for the simt CLI.
//!
//! Settings come from a `simt.toml` file; every key is optional and falls
//! back to its default.

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, SimtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "simt.toml";

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// REPL-specific configuration.
    #[serde(default)]
    pub repl: ReplConfig,

    /// Lex-specific configuration.
    #[serde(default)]
    pub lex: LexConfig,
}

/// REPL-specific configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt printed before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to print the greeting on start.
    #[serde(default = "default_true")]
    pub banner: bool,
}

/// Lex-specific configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Also print the trailing `EOF` token.
    #[serde(default)]
    pub show_eof: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/simt/`
    /// 3. Platform configuration directory
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
            return Err(SimtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SimtError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("simt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("simt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
