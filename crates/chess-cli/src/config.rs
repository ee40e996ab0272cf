//! Configuration file loading for the command-line front end.

use chess_core::FenFields;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings read from `chess.toml`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Position used when no `--fen` is given.
    /// Defaults to the standard starting position.
    #[serde(default = "default_start_fen")]
    pub start_fen: String,
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_start_fen() -> String {
    FenFields::STARTPOS.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            start_fen: default_start_fen(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Default location: `chess.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.start_fen, FenFields::STARTPOS);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn fields_override_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            start_fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.start_fen, "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_is_default() {
        let config = CliConfig::load(Path::new("definitely/not/here/chess.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(
            toml::from_str::<CliConfig>("start_fen = ").map_err(ConfigError::from),
            Err(ConfigError::ParseError(_))
        ));
    }
}
