//! Studio configuration.
//!
//! Loaded from `~/.config/creator-studio/config.toml` when present; every
//! field falls back to its default, so a partial file is fine and a missing
//! one is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Directory name under the user config dir.
const CONFIG_DIR: &str = "creator-studio";
/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Brand title shown in the header.
    pub brand_name: String,
    /// Artificial latency of one generation run, in milliseconds.
    /// Must be non-zero; the exact value carries no meaning.
    pub generation_delay_ms: u64,
    /// Redraw tick interval of the terminal loop, in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            brand_name: "Lovio-Style Creator Studio".to_string(),
            generation_delay_ms: 900,
            tick_rate_ms: 80,
        }
    }
}

impl StudioConfig {
    /// Loads the configuration from the default location.
    ///
    /// Returns defaults when the file is missing or unparseable; a parse
    /// failure is logged, never fatal.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("[Config] Loaded {}", path.display());
                config
            }
            Err(err) if err.is_not_found_or_missing() => {
                tracing::debug!("[Config] No file at {} - using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                tracing::warn!(
                    "[Config] Failed to load {}: {} - using defaults",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Loads the configuration from an explicit path.
    ///
    /// Unlike [`StudioConfig::load`], read and parse failures are returned
    /// to the caller.
    pub fn load_from(path: &Path) -> Result<StudioConfig> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Default config file path under the user config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = StudioConfig::default();
        assert_eq!(config.brand_name, "Lovio-Style Creator Studio");
        assert_eq!(config.generation_delay_ms, 900);
        assert_eq!(config.tick_rate_ms, 80);
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "generation_delay_ms = 25").unwrap();

        let config = StudioConfig::load_from(file.path()).unwrap();
        assert_eq!(config.generation_delay_ms, 25);
        assert_eq!(config.brand_name, "Lovio-Style Creator Studio");
    }

    #[test]
    fn test_load_from_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = StudioConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_not_found_or_missing());
    }

    #[test]
    fn test_load_from_invalid_toml_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "generation_delay_ms = \"soon\"").unwrap();

        let err = StudioConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::StudioError::Serialization { .. }
        ));
    }
}
