//! Offline tooling to refresh the bundled dataset
//!
//! Nothing here runs during rendering: the renderer only ever reads the
//! embedded (or an explicitly provided) dataset.

mod cache_file;
mod fetcher;

pub use cache_file::{CacheFile, DEFAULT_MAX_AGE};
pub use fetcher::{DatasetFetcher, FetchError, DEFAULT_DATASET_URL};

use tracing::{info, warn};

use crate::cache::Dataset;

/// Return the cached dataset when fresh and valid, otherwise fetch, validate and store it
pub fn fetch_or_load(fetcher: &DatasetFetcher, cache: &CacheFile) -> Result<String, FetchError> {
    if cache.is_fresh() {
        let text = cache.load()?;
        match Dataset::parse(&text) {
            Ok(_) => {
                info!(path = %cache.path().display(), "using cached icon dataset");
                return Ok(text);
            }
            Err(err) => {
                warn!(
                    path = %cache.path().display(),
                    error = %err,
                    "cached icon dataset is invalid"
                );
            }
        }
    }
    refresh(fetcher, cache)
}

/// Fetch unconditionally, validate and store
pub fn refresh(fetcher: &DatasetFetcher, cache: &CacheFile) -> Result<String, FetchError> {
    let text = fetcher.fetch()?;
    let dataset = Dataset::parse(&text)?;
    cache.store(&text)?;
    info!(
        path = %cache.path().display(),
        count = dataset.len(),
        "stored icon dataset"
    );
    Ok(text)
}
