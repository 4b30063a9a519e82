//! Typed directory listings and root validation.

use anyhow::{Context, Result};
use log::error;
use std::path::Path;

/// What a directory entry is, decided once at read time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One directory entry: kind plus raw name.
#[derive(Clone, Debug)]
pub struct RawEntry {
    pub kind: EntryKind,
    pub name: String,
}

/// Read the immediate entries of `dir`. Entries whose names are not valid
/// UTF-8 or whose type cannot be determined are skipped; symlinks count as
/// files (they are not followed).
pub fn list_dir(dir: &Path) -> Result<Vec<RawEntry>> {
    let read =
        std::fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;
    let mut entries = Vec::new();
    for item in read {
        let item = item.with_context(|| format!("read entry in {}", dir.display()))?;
        let Some(name) = item.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let Ok(file_type) = item.file_type() else {
            continue;
        };
        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        entries.push(RawEntry { kind, name });
    }
    Ok(entries)
}

/// Split a listing into (file names, directory names), dropping directories
/// whose name exactly matches `excluded_dir`.
pub fn partition_entries(entries: Vec<RawEntry>, excluded_dir: &str) -> (Vec<String>, Vec<String>) {
    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in entries {
        match entry.kind {
            EntryKind::File => files.push(entry.name),
            EntryKind::Dir if entry.name == excluded_dir => {}
            EntryKind::Dir => dirs.push(entry.name),
        }
    }
    (files, dirs)
}

/// Confirm `root` exists and is a directory, logging which check failed.
/// The crawl short-circuits to an empty catalog on a bad root; whether that
/// is fatal is the persister's call.
pub fn validate_root(root: &Path) -> bool {
    match std::fs::metadata(root) {
        Err(e) => {
            error!("root {} is not accessible: {}", root.display(), e);
            false
        }
        Ok(meta) if !meta.is_dir() => {
            error!("root {} is not a directory", root.display());
            false
        }
        Ok(_) => true,
    }
}
