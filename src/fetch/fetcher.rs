//! HTTP download of the icon dataset with fixed-delay retries

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::error::DatasetError;

/// Upstream Iconify heroicons dataset
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/iconify/icon-sets/refs/heads/master/json/heroicons.json";

/// Errors that can occur while fetching or caching the dataset
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt failed
    #[error("giving up on {url} after {attempts} attempts: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        last: String,
    },

    /// Reading or writing the local cache file failed
    #[error("cache file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a usable dataset
    #[error("fetched dataset is invalid: {0}")]
    Invalid(#[from] DatasetError),
}

/// Blocking dataset downloader
#[derive(Debug, Clone)]
pub struct DatasetFetcher {
    url: String,
    max_attempts: u32,
    retry_delay: Duration,
    timeout: Duration,
}

impl Default for DatasetFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_URL)
    }
}

impl DatasetFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_attempts: 3,
            retry_delay: Duration::from_secs(5),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the total number of attempts (at least one is always made)
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the fixed pause between attempts
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the dataset text; non-2xx responses count as failed attempts
    pub fn fetch(&self) -> Result<String, FetchError> {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let mut last = String::new();

        for attempt in 1..=self.max_attempts {
            info!(url = %self.url, attempt, max = self.max_attempts, "fetching icon dataset");

            match agent.get(&self.url).call() {
                Ok(response) => match response.into_string() {
                    Ok(text) => return Ok(text),
                    Err(err) => last = format!("reading response body: {err}"),
                },
                Err(ureq::Error::Status(code, _)) => last = format!("HTTP status {code}"),
                Err(err) => last = err.to_string(),
            }

            warn!(url = %self.url, attempt, error = %last, "dataset fetch attempt failed");
            if attempt < self.max_attempts {
                thread::sleep(self.retry_delay);
            }
        }

        Err(FetchError::Exhausted {
            url: self.url.clone(),
            attempts: self.max_attempts,
            last,
        })
    }
}
