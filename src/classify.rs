//! File classification: stem/extension split and the inclusion policy.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

use crate::types::FileEntry;

/// Video extensions admitted by the canonical allow-list policy
/// (lower-case, leading dot).
pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm", ".m4v", ".mpeg", ".mpg", ".3gp",
    ".ogv", ".ts",
];

/// Extensions the legacy deny-list rejects. Everything else passes, subtitles
/// included.
const JUNK_EXTENSIONS: &[&str] = &[".url", ""];

/// File names the legacy deny-list rejects outright.
const JUNK_FILE_NAMES: &[&str] = &[".DS_Store"];

/// Which files make it into the catalog. The two variants produce materially
/// different catalogs for the same tree, so exactly one is active per crawl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionPolicy {
    /// Keep only known video extensions.
    #[default]
    VideoAllowList,
    /// Keep everything except `.url` files, extension-less files, and `.DS_Store`.
    LegacyJunkDenyList,
}

impl ExtensionPolicy {
    fn admits(self, file_name: &str, ext: &str) -> bool {
        match self {
            ExtensionPolicy::VideoAllowList => VIDEO_EXTENSIONS.contains(&ext),
            ExtensionPolicy::LegacyJunkDenyList => {
                !JUNK_EXTENSIONS.contains(&ext) && !JUNK_FILE_NAMES.contains(&file_name)
            }
        }
    }
}

/// Split a raw file name into (stem, extension). The extension is lower-cased
/// and keeps its leading dot; files without one get an empty string, and a
/// lone leading dot (`.DS_Store`) does not count as an extension.
pub fn split_file_name(file_name: &str) -> (String, String) {
    let path = Path::new(file_name);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file_name);
            (stem.to_string(), format!(".{}", ext.to_lowercase()))
        }
        None => (file_name.to_string(), String::new()),
    }
}

/// Classify a raw file name under `policy`. `None` means the file is dropped
/// silently; failing the policy is not an error.
pub fn classify(file_name: &str, policy: ExtensionPolicy) -> Option<FileEntry> {
    let (name, ext) = split_file_name(file_name);
    policy.admits(file_name, &ext).then(|| FileEntry {
        file_name: file_name.to_string(),
        name,
        ext,
    })
}
