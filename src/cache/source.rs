//! Where the icon dataset text comes from

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::DatasetError;

/// Dataset shipped inside the binary
pub const BUNDLED_DATASET: &str = include_str!("../../data/heroicons_cache.json");

/// A provider of raw dataset text for [`super::BodyCache`]
pub trait DatasetSource: Send + Sync + fmt::Debug {
    /// Human-readable origin used in diagnostics
    fn name(&self) -> Cow<'_, str>;

    fn load(&self) -> Result<Cow<'_, str>, DatasetError>;
}

/// The dataset compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl DatasetSource for EmbeddedDataset {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("embedded heroicons dataset")
    }

    fn load(&self) -> Result<Cow<'_, str>, DatasetError> {
        Ok(Cow::Borrowed(BUNDLED_DATASET))
    }
}

/// Dataset text held in memory
#[derive(Debug, Clone)]
pub struct InlineDataset {
    text: String,
}

impl InlineDataset {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DatasetSource for InlineDataset {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("inline dataset")
    }

    fn load(&self) -> Result<Cow<'_, str>, DatasetError> {
        Ok(Cow::Borrowed(&self.text))
    }
}

/// Dataset read from disk on first use
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileDataset {
    fn name(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }

    fn load(&self) -> Result<Cow<'_, str>, DatasetError> {
        std::fs::read_to_string(&self.path)
            .map(Cow::Owned)
            .map_err(|err| DatasetError::Unreadable {
                source_name: self.path.display().to_string(),
                message: err.to_string(),
            })
    }
}
