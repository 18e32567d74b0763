//! Client configuration: regions, retry policy and credential loading

use crate::error::{ApiError, ApiResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default number of matches returned by a single match-list query
pub const MAX_QUEUE_DEPTH: usize = 20;

/// Default pause between attempts after a 429
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

/// Riot platform routing values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Region {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Na1,
    Oc1,
    Tr1,
    Ru,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Br1 => "br1",
            Region::Eun1 => "eun1",
            Region::Euw1 => "euw1",
            Region::Jp1 => "jp1",
            Region::Kr => "kr",
            Region::La1 => "la1",
            Region::La2 => "la2",
            Region::Na1 => "na1",
            Region::Oc1 => "oc1",
            Region::Tr1 => "tr1",
            Region::Ru => "ru",
        }
    }

    /// Root URL of the LoL API for this region
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com/lol/", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when the API answers 429
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// When false, the first 429 fails the request
    pub wait_on_limit: bool,
    /// Fixed sleep between attempts
    pub backoff: Duration,
    /// Total attempts before giving up; `None` retries forever
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            wait_on_limit: true,
            backoff: DEFAULT_BACKOFF,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /// Policy that fails immediately on 429
    pub fn no_wait() -> Self {
        Self {
            wait_on_limit: false,
            ..Self::default()
        }
    }

    /// Bound the 429 loop to `retries` extra attempts after the first request
    pub fn with_max_retries(mut self, retries: Option<u32>) -> Self {
        self.max_attempts = retries.map(|n| n.saturating_add(1));
        self
    }

    /// Whether another attempt is allowed after `attempts` rate-limited tries
    pub fn should_retry(&self, attempts: u32) -> bool {
        if !self.wait_on_limit {
            return false;
        }
        match self.max_attempts {
            Some(max) => attempts < max,
            None => true,
        }
    }
}

/// Settings for a [`crate::RiotApi`] instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub region: Region,
    pub queue_depth: usize,
    pub retry: RetryPolicy,
    /// Root URL all endpoint paths are joined onto, always ending in `/`
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            queue_depth: MAX_QUEUE_DEPTH,
            retry: RetryPolicy::default(),
            base_url: region.base_url(),
        }
    }

    pub fn with_queue_depth(mut self, queue_depth: usize) -> Self {
        self.queue_depth = queue_depth;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Point the client at another server (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let mut url = base_url.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }
}

/// Read the API key from a local file
///
/// Missing, unreadable or blank files are configuration errors.
pub fn read_api_key(path: &Path) -> ApiResult<String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::Config(format!(
            "Something is not right with your '{}' file: {}",
            path.display(),
            e
        ))
    })?;

    let key = content.trim();
    if key.is_empty() {
        return Err(ApiError::Config(format!(
            "API key file '{}' is empty",
            path.display()
        )));
    }
    Ok(key.to_string())
}

/// Returns the default cache path: ~/.cache/match_history/responses.json
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("match_history"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("responses.json")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
