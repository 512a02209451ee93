//! Tool configuration loaded from TOML
//!
//! Every section and key is optional:
//!
//! ```toml
//! [dataset]
//! url = "https://raw.githubusercontent.com/iconify/icon-sets/refs/heads/master/json/heroicons.json"
//! cache_file = "data/heroicons_cache.json"
//! max_age_days = 30
//! max_attempts = 3
//! retry_delay_secs = 5
//! timeout_secs = 30
//!
//! [codegen]
//! output = "src/icons/generated.rs"
//!
//! [render]
//! stroke_width = "2"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::fetch::{CacheFile, DatasetFetcher, DEFAULT_DATASET_URL};
use crate::renderer::SvgConfig;

/// Errors that can occur when loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub dataset: DatasetConfig,
    pub codegen: CodegenConfig,
    pub render: SvgConfig,
}

/// Where the dataset is fetched from and cached
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub url: String,
    pub cache_file: PathBuf,
    pub max_age_days: u64,
    pub max_attempts: u32,
    pub retry_delay_secs: u64,
    pub timeout_secs: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            cache_file: PathBuf::from("data/heroicons_cache.json"),
            max_age_days: 30,
            max_attempts: 3,
            retry_delay_secs: 5,
            timeout_secs: 30,
        }
    }
}

impl DatasetConfig {
    pub fn fetcher(&self) -> DatasetFetcher {
        DatasetFetcher::new(self.url.clone())
            .with_max_attempts(self.max_attempts)
            .with_retry_delay(Duration::from_secs(self.retry_delay_secs))
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn cache_file(&self) -> CacheFile {
        CacheFile::new(self.cache_file.clone())
            .with_max_age(Duration::from_secs(self.max_age_days * 24 * 60 * 60))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    pub output: PathBuf,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("src/icons/generated.rs"),
        }
    }
}

impl ToolConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
