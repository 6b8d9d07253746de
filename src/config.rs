// src/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::quest::store::DEFAULT_STORAGE_KEY;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "MAKER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "maker.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakerConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub log_dir: PathBuf,
    /// Wipe stored quests every time the app starts.
    pub reset_on_start: bool,
    pub latency: LatencyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub fetch_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./db"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_dir: PathBuf::from("./logs"),
            reset_on_start: false,
            latency: LatencyConfig::default(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fetch_ms: 150,
            create_ms: 250,
            update_ms: 200,
            delete_ms: 150,
        }
    }
}

impl MakerConfig {
    /// Load from `$MAKER_CONFIG`, falling back to `./maker.yml`.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from_path(&path)
    }

    /// A missing or blank file yields the defaults. A malformed one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: MakerConfig = serde_yaml::from_str(&content)?;
        if config.storage_key.trim().is_empty() {
            return Err("storage_key must not be empty".into());
        }
        Ok(config)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("maker.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MakerError;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("maker.yml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = MakerConfig::load_from_path(&dir.path().join("absent.yml")).unwrap();
        assert_eq!(config, MakerConfig::default());
        assert!(!config.reset_on_start);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("reset_on_start: true\nlatency:\n  enabled: false\n");
        let config = MakerConfig::load_from_path(&path).unwrap();

        assert!(config.reset_on_start);
        assert!(!config.latency.enabled);
        assert_eq!(config.latency.create_ms, 250);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.database_path(), PathBuf::from("./db").join("maker.db"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_dir, path) = write_config("latency: [1, 2\n");
        assert!(matches!(MakerConfig::load_from_path(&path), Err(MakerError::Yaml(_))));
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let (_dir, path) = write_config("storage_key: \"  \"\n");
        assert!(matches!(MakerConfig::load_from_path(&path), Err(MakerError::Config(_))));
    }
}
