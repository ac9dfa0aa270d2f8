//! Configuration structures for the normalization engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NormError, NormResult};
use crate::types::DEFAULT_LANGUAGE;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Language used when a request does not name one.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Directory of `<language>.json` lexicon files.
    ///
    /// Each file registers a language pack, replacing a built-in pack with the
    /// same language code.
    #[serde(default)]
    pub lexicon_dir: Option<PathBuf>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            lexicon_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> NormResult<Self> {
        toml::from_str(s).map_err(|e| NormError::config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> NormResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
            .map_err(|e| NormError::config(format!("{}: {e}", path.display())))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
