//! File-based response cache
//!
//! One JSON file per request signature, named `<key>.json`, holding the raw
//! page of records and the time it was written. Entries older than the TTL
//! are evicted when read.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::key::cache_key;
use crate::error::{Error, Result};

/// On-disk representation of one cached response
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Seconds since the Unix epoch when the entry was written
    pub timestamp: f64,
    pub data: Vec<Value>,
    pub url: String,
    pub params: BTreeMap<String, String>,
}

/// TTL-expiring cache of raw API pages.
///
/// A disabled cache (no directory) never touches the filesystem. I/O
/// failures are logged and treated as misses; they never fail a fetch.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: Option<PathBuf>,
    ttl: Duration,
}

impl ResponseCache {
    /// Open a cache rooted at `dir`, creating the directory if needed.
    ///
    /// Falls back to a disabled cache when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        let dir = dir.into();
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                log::debug!("Using cache directory {}", dir.display());
                Self {
                    dir: Some(dir),
                    ttl,
                }
            }
            Err(e) => {
                log::warn!(
                    "Failed to create cache directory {}: {}; caching disabled",
                    dir.display(),
                    e
                );
                Self::disabled()
            }
        }
    }

    /// A cache that stores nothing (for `--no-cache`)
    pub fn disabled() -> Self {
        Self {
            dir: None,
            ttl: Duration::ZERO,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    /// Cached page for this request, if present and fresh.
    ///
    /// Expired and corrupt entries are deleted.
    pub fn get(&self, url: &str, params: &[(&str, String)]) -> Option<Vec<Value>> {
        let dir = self.dir.as_ref()?;
        let key = cache_key(url, params);
        let path = entry_path(dir, &key);

        let entry = match read_entry(&path) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                log::debug!("Cache miss for {}", key);
                return None;
            }
            Err(e) => {
                log::warn!("Discarding cache entry: {}", e);
                remove_entry(&path);
                return None;
            }
        };

        if self.is_expired(&entry, now_secs()) {
            log::debug!("Cache entry {} expired", key);
            remove_entry(&path);
            return None;
        }

        log::debug!("Cache hit for {}", key);
        Some(entry.data)
    }

    /// Store a page for this request. No-op when disabled.
    pub fn set(&self, url: &str, params: &[(&str, String)], data: &[Value]) {
        self.set_at(url, params, data, now_secs());
    }

    fn set_at(&self, url: &str, params: &[(&str, String)], data: &[Value], timestamp: f64) {
        let Some(dir) = self.dir.as_ref() else {
            return;
        };
        let key = cache_key(url, params);
        let entry = CacheEntry {
            timestamp,
            data: data.to_vec(),
            url: url.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        };

        let result = serde_json::to_vec(&entry)
            .map_err(std::io::Error::from)
            .and_then(|bytes| std::fs::write(entry_path(dir, &key), bytes));
        if let Err(e) = result {
            let err = Error::cache(format!("Failed to write cache entry {}: {}", key, e))
                .with_cause(e);
            log::warn!("{}", err);
        }
    }

    /// Delete every entry. Returns the number of files removed.
    pub fn clear(&self) -> usize {
        let Some(dir) = self.dir.as_ref() else {
            return 0;
        };
        let mut removed = 0;
        for path in entry_files(dir) {
            match std::fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => log::warn!("Failed to remove {}: {}", path.display(), e),
            }
        }
        log::debug!("Removed {} cache entries", removed);
        removed
    }

    /// Summary of the entries currently on disk.
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();
        let Some(dir) = self.dir.as_ref() else {
            return stats;
        };
        let now = now_secs();

        for path in entry_files(dir) {
            stats.total_entries += 1;
            stats.total_size_bytes += std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

            match read_entry(&path) {
                Ok(Some(entry)) if !self.is_expired(&entry, now) => {
                    stats.valid_entries += 1;
                    let written = timestamp_to_datetime(entry.timestamp);
                    stats.oldest_entry = min_time(stats.oldest_entry, written);
                    stats.newest_entry = max_time(stats.newest_entry, written);
                }
                _ => stats.expired_entries += 1,
            }
        }
        stats
    }

    fn is_expired(&self, entry: &CacheEntry, now: f64) -> bool {
        now - entry.timestamp > self.ttl.as_secs_f64()
    }
}

/// Statistics about cache state
#[derive(Debug, Default, PartialEq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    /// Expired or unreadable entries
    pub expired_entries: usize,
    pub total_size_bytes: u64,
    pub oldest_entry: Option<DateTime<Utc>>,
    pub newest_entry: Option<DateTime<Utc>>,
}

fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}

fn entry_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect()
}

/// `Ok(None)` when the file does not exist.
fn read_entry(path: &Path) -> Result<Option<CacheEntry>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            let message = format!("Failed to read {}: {}", path.display(), e);
            return Err(Error::cache(message).with_cause(e));
        }
    };
    let entry = serde_json::from_slice(&bytes).map_err(|e| {
        Error::cache(format!("Corrupt cache entry {}: {}", path.display(), e)).with_cause(e)
    })?;
    Ok(Some(entry))
}

fn remove_entry(path: &Path) {
    if let Err(e) = std::fs::remove_file(path)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        log::warn!("Failed to remove cache entry {}: {}", path.display(), e);
    }
}

fn now_secs() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

fn timestamp_to_datetime(timestamp: f64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt((timestamp * 1000.0) as i64)
        .single()
}

fn min_time(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn max_time(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}
