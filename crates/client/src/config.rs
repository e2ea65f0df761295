// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name for the persisted configuration, relative to the
/// working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tour-planner.json";

/// Tokens this short are placeholders, not credentials.
const MIN_TOKEN_LEN: usize = 10;

/// Persisted client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub bearer_token: String,
    #[serde(default)]
    pub base_url: String,
}

impl ClientConfig {
    /// Loads the configuration from `path`. A missing file yields the
    /// defaults, and an empty base URL falls back to `default_origin`
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file exists but cannot be
    /// read or parsed.
    pub fn load(path: &Path, default_origin: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if path.exists() {
            let raw: String = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        if config.base_url.is_empty() {
            config.base_url = default_origin.to_string();
        }
        Ok(config)
    }

    /// Writes the configuration to `path` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when serialization or the write
    /// fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw: String =
            serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        std::fs::write(path, raw).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Whether a usable bearer token is present.
    #[must_use]
    pub fn is_token_configured(&self) -> bool {
        self.bearer_token.len() > MIN_TOKEN_LEN
    }
}

/// Failures loading or saving the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tour-planner-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults_with_origin() {
        let config: ClientConfig =
            ClientConfig::load(&scratch_path("missing.json"), "http://localhost:5000").unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert!(config.bearer_token.is_empty());
        assert!(!config.is_token_configured());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path: PathBuf = scratch_path("roundtrip.json");
        let config: ClientConfig = ClientConfig {
            bearer_token: String::from("a-real-looking-token"),
            base_url: String::from("https://tours.example.com"),
        };
        config.save(&path).unwrap();

        let loaded: ClientConfig = ClientConfig::load(&path, "http://localhost:5000").unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
        assert!(loaded.is_token_configured());
    }

    #[test]
    fn test_saved_empty_base_url_falls_back_to_origin() {
        let path: PathBuf = scratch_path("empty-origin.json");
        ClientConfig {
            bearer_token: String::from("a-real-looking-token"),
            base_url: String::new(),
        }
        .save(&path)
        .unwrap();

        let loaded: ClientConfig = ClientConfig::load(&path, "http://localhost:5000").unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_short_token_is_not_configured() {
        let config: ClientConfig = ClientConfig {
            bearer_token: String::from("short"),
            base_url: String::from("http://localhost:5000"),
        };
        assert!(!config.is_token_configured());
    }

    #[test]
    fn test_unreadable_json_is_a_parse_error() {
        let path: PathBuf = scratch_path("garbage.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err: ConfigError =
            ClientConfig::load(&path, "http://localhost:5000").unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
