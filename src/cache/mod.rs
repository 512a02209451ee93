//! Thread-safe map from icon name to path-data body
//!
//! The dataset is decoded in a single pass the first time any body is
//! requested; every icon found is cached at once and never evicted. A failed
//! decode is memoized too, so a broken dataset is reported identically to
//! every caller instead of being re-parsed.

mod dataset;
mod source;

pub use dataset::{Dataset, DatasetIcon};
pub use source::{DatasetSource, EmbeddedDataset, FileDataset, InlineDataset, BUNDLED_DATASET};

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::error::{CacheError, DatasetError};

type Bodies = HashMap<String, Arc<str>>;

/// Lazily populated body cache over a [`DatasetSource`]
pub struct BodyCache {
    source: Box<dyn DatasetSource>,
    bodies: OnceLock<Result<Bodies, DatasetError>>,
    decodes: AtomicUsize,
}

impl BodyCache {
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            bodies: OnceLock::new(),
            decodes: AtomicUsize::new(0),
        }
    }

    /// Process-wide cache over the embedded dataset
    pub fn bundled() -> &'static BodyCache {
        static BUNDLED: OnceLock<BodyCache> = OnceLock::new();
        BUNDLED.get_or_init(|| BodyCache::new(EmbeddedDataset))
    }

    /// Look up the body for `name`, decoding the dataset on first use.
    ///
    /// Concurrent first calls block on a single decode and all observe the
    /// fully populated map.
    pub fn resolve(&self, name: &str) -> Result<Arc<str>, CacheError> {
        if name.is_empty() {
            return Err(CacheError::not_found(name));
        }

        let bodies = self.bodies().map_err(|err| CacheError::Dataset(err.clone()))?;
        match bodies.get(name) {
            Some(body) => {
                debug!(name, "icon body cache hit");
                Ok(Arc::clone(body))
            }
            None => Err(CacheError::not_found(name)),
        }
    }

    /// Whether the dataset has been decoded (successfully or not)
    pub fn is_loaded(&self) -> bool {
        self.bodies.get().is_some()
    }

    /// Number of cached bodies; zero before the first decode
    pub fn len(&self) -> usize {
        match self.bodies.get() {
            Some(Ok(bodies)) => bodies.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times the dataset has been decoded; never more than one
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }

    fn bodies(&self) -> Result<&Bodies, &DatasetError> {
        self.bodies.get_or_init(|| self.decode()).as_ref()
    }

    fn decode(&self) -> Result<Bodies, DatasetError> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        let text = self.source.load()?;
        let dataset = Dataset::parse(&text)?;
        info!(
            source = %self.source.name(),
            count = dataset.len(),
            "decoded icon dataset"
        );
        Ok(dataset.into_bodies())
    }
}

impl fmt::Debug for BodyCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyCache")
            .field("source", &self.source)
            .field("loaded", &self.is_loaded())
            .field("len", &self.len())
            .finish()
    }
}
