//! Serde model of the Iconify-style icon dataset

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::DatasetError;

/// Top-level dataset document; only `icons` is read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    /// Icon name -> icon entry
    #[serde(default)]
    pub icons: BTreeMap<String, DatasetIcon>,
}

/// One icon entry; fields beyond these are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetIcon {
    /// Opaque path-data markup placed inside `<svg>`
    pub body: String,
}

impl Dataset {
    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        serde_json::from_str(text).map_err(|err| DatasetError::malformed(&err))
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Consume the dataset into a name -> shared body map
    pub fn into_bodies(self) -> HashMap<String, Arc<str>> {
        self.icons
            .into_iter()
            .map(|(name, icon)| (name, Arc::from(icon.body)))
            .collect()
    }
}
