//! In-memory directory cache keyed by absolute path.
//!
//! An entry is reusable only while the directory's current modification time
//! still equals the cached one. Renaming, adding, or removing a direct child
//! updates a directory's mtime; changes deeper in the tree do not, so
//! invalidation is exactly as fine-grained as the filesystem's own mtime
//! semantics. The cache lives for the process lifetime and is never persisted.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::UNIX_EPOCH;

/// One cached directory result.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    /// Directory mtime in nanoseconds since epoch at the time of the crawl.
    pub mtime_ns: i64,
    pub data: T,
}

/// Path → cached result map. Mutex-guarded: the crawl runs on real worker
/// threads. Within one crawl each directory is visited at most once (tree
/// recursion), so map-level locking keeps per-key access serialized.
#[derive(Debug, Default)]
pub struct DirCache<T> {
    entries: Mutex<HashMap<PathBuf, CacheEntry<T>>>,
}

impl<T: Clone> DirCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, path: &Path) -> Option<CacheEntry<T>> {
        self.entries.lock().unwrap().get(path).cloned()
    }

    pub fn put(&self, path: &Path, mtime_ns: i64, data: T) {
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), CacheEntry { mtime_ns, data });
    }

    /// Re-stat `path` and compare against the entry. Costs one stat syscall;
    /// a vanished or unreadable directory invalidates the entry.
    pub fn is_valid(&self, path: &Path, entry: &CacheEntry<T>) -> bool {
        dir_mtime_ns(path)
            .map(|m| m == entry.mtime_ns)
            .unwrap_or(false)
    }

    /// Cached data for `path` when the entry is still fresh for `mtime_ns`.
    /// Used by the crawl, which has already stat'ed the directory.
    pub fn get_fresh(&self, path: &Path, mtime_ns: i64) -> Option<T> {
        self.get(path)
            .filter(|e| e.mtime_ns == mtime_ns)
            .map(|e| e.data)
    }

    /// Drop every entry. Safe to call between independent crawl invocations.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Modification time of `path` in nanoseconds since epoch.
pub fn dir_mtime_ns(path: &Path) -> Result<i64> {
    let meta = std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    Ok(meta
        .modified()
        .map(|t| t.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos() as i64)
        .unwrap_or(0))
}
