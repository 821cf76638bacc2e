//! Bounded on-disk cache for generated spoiler content.
//!
//! One JSON file holds a single mapping of subject id → `{content,
//! timestamp}`. Entries expire seven days after creation, checked lazily on
//! read (a stale entry is reported absent but stays in the file until the
//! next write pass). Writes enforce the capacity cap: after insertion the
//! entries are sorted by timestamp descending and truncated to the most
//! recent [`DEFAULT_MAX_ENTRIES`].
//!
//! Storage failures never propagate: a read error is a miss, a write error
//! is a no-op, both logged with a warning. The cache file is shared mutable
//! state with no locking — concurrent writers for the same id race, which
//! is acceptable because regenerated entries are idempotent-equivalent.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{NexusAiError, Result};

/// Maximum number of cached entries kept after a write.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Retention window; entries at least this old read as absent.
pub const DEFAULT_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// One persisted cache record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub content: String,
    /// Creation time, unix epoch milliseconds.
    pub timestamp: u64,
}

/// File-backed spoiler cache, keyed by subject id.
#[derive(Debug, Clone)]
pub struct ContentCache {
    path: PathBuf,
    max_entries: usize,
    ttl: Duration,
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::with_path(default_cache_path())
    }
}

impl ContentCache {
    /// Create a cache at the default location
    /// (`~/.cache/nexus-ai/spoilers.json`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache backed by a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl: DEFAULT_TTL,
        }
    }

    /// Override the capacity cap.
    pub fn max_entries(mut self, n: usize) -> Self {
        self.max_entries = n;
        self
    }

    /// Override the retention window.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up cached content for a subject id.
    ///
    /// Returns `None` if no entry exists, the entry has aged past the
    /// retention window, or the file can't be read.
    pub fn get(&self, id: &str) -> Option<String> {
        self.get_at(id, now_millis())
    }

    /// Insert or overwrite content for a subject id, then enforce the
    /// capacity cap. Errors are absorbed.
    pub fn put(&self, id: &str, content: &str) {
        self.put_at(id, content, now_millis());
    }

    fn get_at(&self, id: &str, now: u64) -> Option<String> {
        let entries = self.load();
        let entry = entries.get(id)?;
        if self.is_expired(entry, now) {
            return None;
        }
        Some(entry.content.clone())
    }

    fn put_at(&self, id: &str, content: &str, now: u64) {
        let mut entries = self.load();
        entries.insert(
            id.to_string(),
            CacheEntry {
                content: content.to_string(),
                timestamp: now,
            },
        );

        // Write pass: drop anything already past the retention window, then
        // keep only the most recent entries up to the cap.
        entries.retain(|_, e| !self.is_expired(e, now));
        if entries.len() > self.max_entries {
            let mut sorted: Vec<(String, CacheEntry)> = entries.into_iter().collect();
            sorted.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp).then(a.0.cmp(&b.0)));
            sorted.truncate(self.max_entries);
            entries = sorted.into_iter().collect();
        }

        if let Err(e) = self.store(&entries) {
            warn!(path = %self.path.display(), error = %e, "failed to persist spoiler cache");
        }
    }

    fn is_expired(&self, entry: &CacheEntry, now: u64) -> bool {
        let age = now.saturating_sub(entry.timestamp);
        u128::from(age) >= self.ttl.as_millis()
    }

    /// Read the full mapping from disk.
    ///
    /// Missing file is an empty cache; unreadable or corrupt files are
    /// treated the same, with a warning.
    fn load(&self) -> BTreeMap<String, CacheEntry> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read spoiler cache");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt spoiler cache, starting fresh");
                BTreeMap::new()
            }
        }
    }

    /// Write the full mapping to disk (atomic write via tmp + rename).
    fn store(&self, entries: &BTreeMap<String, CacheEntry>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NexusAiError::Storage(format!(
                    "failed to create cache dir {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string(entries)
            .map_err(|e| NexusAiError::Storage(format!("failed to serialize cache: {e}")))?;
        std::fs::write(&tmp_path, &json).map_err(|e| {
            NexusAiError::Storage(format!(
                "failed to write cache file {}: {e}",
                tmp_path.display()
            ))
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            NexusAiError::Storage(format!(
                "failed to rename cache file {} → {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;

        Ok(())
    }
}

/// Default cache path: `~/.cache/nexus-ai/spoilers.json`.
fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("nexus-ai")
        .join("spoilers.json")
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
