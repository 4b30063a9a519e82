//! Catalog persistence: atomic writes, the zero-result fallback, and
//! incremental merging.

use anyhow::{Context, Result, bail};
use log::warn;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Catalog, Course};

/// How a persist call ended: the catalog file was (re)written, or a
/// zero-result full crawl left the existing file untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Catalog written, with the number of courses it now holds.
    Written(usize),
    /// Fresh result was empty; the existing non-empty catalog was kept as-is.
    PreservedExisting,
}

/// Read and parse the catalog at `path`. `None` when the file does not exist.
/// A file that exists but does not parse is an error: silently discarding or
/// guessing at a corrupt catalog risks data loss.
pub fn load_catalog(path: &Path) -> Result<Option<Catalog>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read catalog {}", path.display())),
    };
    let catalog =
        serde_json::from_str(&raw).with_context(|| format!("parse catalog {}", path.display()))?;
    Ok(Some(catalog))
}

/// Temp file next to the final path so the rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog");
    path.parent()
        .unwrap_or(Path::new("."))
        .join(format!("{name}.tmp"))
}

/// Write the catalog to a temp file next to `path`, then rename into place.
/// Write failures propagate; a failed persist must never look like success.
pub fn write_catalog(path: &Path, catalog: &[Course]) -> Result<()> {
    let temp = temp_path_for(path);
    let json = serde_json::to_string_pretty(catalog).context("serialize catalog")?;
    fs::write(&temp, json).with_context(|| format!("write temp catalog {}", temp.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("rename {} -> {}", temp.display(), path.display()))?;
    Ok(())
}

/// Persist a full (unfiltered) crawl: replace the catalog wholesale. An empty
/// result keeps an existing non-empty catalog instead of destroying it; with
/// nothing usable to fall back on, the empty result is fatal.
pub fn persist_full(path: &Path, fresh: Vec<Course>) -> Result<PersistOutcome> {
    if fresh.is_empty() {
        return match load_catalog(path)? {
            Some(existing) if !existing.is_empty() => {
                warn!(
                    "crawl found no courses; keeping existing catalog with {} courses",
                    existing.len()
                );
                Ok(PersistOutcome::PreservedExisting)
            }
            _ => bail!(
                "crawl found no courses and {} has no usable catalog to fall back on",
                path.display()
            ),
        };
    }
    let count = fresh.len();
    write_catalog(path, &fresh)?;
    Ok(PersistOutcome::Written(count))
}

/// Persist an incremental crawl (explicit course filter): merge the fresh
/// courses into the existing catalog. Same-named entries are replaced by the
/// freshly indexed version; surviving entries keep their order, fresh ones
/// append.
pub fn persist_incremental(path: &Path, fresh: Vec<Course>) -> Result<PersistOutcome> {
    let existing = load_catalog(path)?.unwrap_or_default();
    let fresh_names: HashSet<&str> = fresh.iter().map(|c| c.name.as_str()).collect();
    let mut merged: Catalog = existing
        .into_iter()
        .filter(|c| !fresh_names.contains(c.name.as_str()))
        .collect();
    merged.extend(fresh);
    let count = merged.len();
    write_catalog(path, &merged)?;
    Ok(PersistOutcome::Written(count))
}
