//! Persistent response cache
//!
//! Maps a request key (endpoint path plus non-secret query) to the JSON body
//! that was fetched for it. Loaded once when the cache is constructed and
//! written back once when it is flushed or dropped. Not-found outcomes are
//! stored as `null` so they are not fetched again either.

use crate::error::ApiResult;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Request-key to response-body map backed by a JSON file
#[derive(Debug)]
pub struct ResponseCache {
    path: PathBuf,
    /// Sorted so the flushed file has a stable key order
    entries: BTreeMap<String, Value>,
    dirty: bool,
}

impl ResponseCache {
    /// Load cache from disk, or create empty if the file is missing or malformed
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, Value>>(&content) {
                Ok(entries) => {
                    log::info!(
                        "Loaded response cache with {} entries from {}",
                        entries.len(),
                        path.display()
                    );
                    entries
                }
                Err(e) => {
                    log::warn!("Failed to parse cache file, starting fresh: {}", e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No cache file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Failed to read cache file, starting fresh: {}", e);
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries,
            dirty: false,
        }
    }

    /// Return the stored value for `key`, or compute, store and return it
    ///
    /// `compute` is not called on a hit. A failed `compute` stores nothing.
    pub fn get_or_compute<F>(&mut self, key: &str, compute: F) -> ApiResult<Value>
    where
        F: FnOnce() -> ApiResult<Value>,
    {
        if let Some(value) = self.entries.get(key) {
            log::debug!("Cache hit for {}", key);
            return Ok(value.clone());
        }

        log::debug!("Cache miss for {}", key);
        let value = compute()?;
        self.entries.insert(key.to_string(), value.clone());
        self.dirty = true;
        Ok(value)
    }

    /// Write the full mapping to disk with sorted keys and indentation
    pub fn flush(&mut self) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        // Write next to the target and rename so a partial write never
        // replaces a good cache file.
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;

        self.dirty = false;
        log::info!(
            "Saved response cache with {} entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when entries were added since the last load or flush
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Drop for ResponseCache {
    fn drop(&mut self) {
        if !self.dirty {
            return;
        }
        if let Err(e) = self.flush() {
            log::warn!("Failed to save response cache: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
