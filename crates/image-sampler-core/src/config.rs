use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration for the sampling and relocation process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory to draw image files from
    pub source_dir: PathBuf,

    /// Directory to move the sampled files into (created if absent)
    pub destination_dir: PathBuf,

    /// Number of files to sample
    pub sample_size: usize,

    /// Recognized image extensions, matched case-insensitively
    pub extensions: Vec<String>,

    /// Whether to run without moving any files
    pub dry_run: bool,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("images"),
            destination_dir: PathBuf::from("images_annotated"),
            sample_size: 50,
            extensions: vec![
                "png".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
                "bmp".to_string(),
                "gif".to_string(),
            ],
            dry_run: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Configuration(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(Error::Configuration(
                "sample_size must be a positive integer".to_string(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(Error::Configuration(
                "at least one image extension must be configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true if the filename carries one of the configured extensions
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|e| e.to_lowercase() == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_size, 50);
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        let mut config = Config::default();
        config.sample_size = 0;
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let mut config = Config::default();
        config.extensions.clear();
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_matches_extension_case_insensitive() {
        let config = Config::default();
        assert!(config.matches_extension("jpg"));
        assert!(config.matches_extension("JPG"));
        assert!(config.matches_extension("JpEg"));
        assert!(!config.matches_extension("txt"));
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.sample_size = 25;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.sample_size, 25);
        assert_eq!(loaded.extensions, config.extensions);
    }
}
