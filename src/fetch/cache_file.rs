//! Local copy of the fetched dataset with a freshness window

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::FetchError;

/// How long a cached dataset is trusted before re-fetching
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct CacheFile {
    path: PathBuf,
    max_age: Duration,
}

impl CacheFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_age: DEFAULT_MAX_AGE,
        }
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file exists and was modified less than `max_age` ago.
    ///
    /// A modification time in the future counts as age zero.
    pub fn is_fresh(&self) -> bool {
        let Ok(modified) = fs::metadata(&self.path).and_then(|meta| meta.modified()) else {
            return false;
        };
        let age = modified.elapsed().unwrap_or(Duration::ZERO);
        age < self.max_age
    }

    pub fn load(&self) -> Result<String, FetchError> {
        fs::read_to_string(&self.path).map_err(|source| self.io_error(source))
    }

    /// Write `data`, creating parent directories as needed
    pub fn store(&self, data: &str) -> Result<(), FetchError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.path, data).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> FetchError {
        FetchError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
