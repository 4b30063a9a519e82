//! Public types for the lectern API and the catalog artifact.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::classify::ExtensionPolicy;

/// A classified file inside a topic.
///
/// Field names serialize camelCase so the artifact matches what the viewer
/// consumes: `{"fileName": "video.mp4", "name": "video", "ext": ".mp4"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Raw file name as read from the directory.
    pub file_name: String,
    /// File name without its extension.
    pub name: String,
    /// Extension, lower-cased, with its leading dot. Empty when the file has none.
    pub ext: String,
}

/// A directory (at any depth within a course) that directly contains
/// classified files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Path relative to the course root, `/`-joined for nested directories.
    /// Two same-named leaf directories at different depths stay distinguishable.
    pub name: String,
    pub files: Vec<FileEntry>,
    /// Set when the course had no subdirectories and its root files were
    /// folded into this one synthetic topic.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_topic_less: bool,
}

/// Top-level entity named after a root-level directory. Dropped from the
/// catalog when it ends up with zero topics after classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    pub topics: Vec<Topic>,
}

/// The persisted artifact: a flat array of courses.
pub type Catalog = Vec<Course>;

/// Lib-only options for [`crawl_catalog`](crate::crawl_catalog). Only the
/// fields that apply when embedding the crawler; the CLI adds output and
/// verbosity on top via [`Opts`].
#[derive(Clone, Debug)]
pub struct CrawlOpts {
    /// Exact-match course-name allow-list. `None` means a full crawl; `Some`
    /// makes the crawl incremental (the persister merges instead of replacing).
    pub courses: Option<Vec<String>>,
    /// Apply numeric-aware ordering to topics and files. Unsorted mode keeps
    /// directory-read order, which is filesystem-dependent.
    pub sorted: bool,
    /// Reuse cached directory results while their mtimes are unchanged.
    pub use_cache: bool,
    /// Log one summary line per indexed course.
    pub log_course_details: bool,
    /// Fail the crawl on the first unreadable directory instead of skipping it.
    pub strict: bool,
    /// Cap on simultaneously in-flight directory reads. `None` uses the default.
    pub max_in_flight: Option<usize>,
    /// Which files make it into the catalog.
    pub policy: ExtensionPolicy,
}

impl Default for CrawlOpts {
    fn default() -> Self {
        Self {
            courses: None,
            sorted: false,
            use_cache: true,
            log_course_details: false,
            strict: false,
            max_in_flight: None,
            policy: ExtensionPolicy::default(),
        }
    }
}

/// Full options (CLI). Use [`CrawlOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Catalog path. `None` writes the fixed filename in the working directory.
    pub output: Option<PathBuf>,
    /// Exact-match course-name allow-list; selects the incremental persist path.
    pub courses: Option<Vec<String>>,
    pub sorted: bool,
    pub use_cache: bool,
    pub log_course_details: bool,
    /// Verbose output.
    pub verbose: bool,
    /// Strict mode: fail on the first unreadable directory instead of skipping.
    pub strict: bool,
    /// Cap on simultaneously in-flight directory reads.
    pub max_in_flight: Option<usize>,
    pub policy: ExtensionPolicy,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            output: None,
            courses: None,
            sorted: false,
            use_cache: true,
            log_course_details: false,
            verbose: false,
            strict: false,
            max_in_flight: None,
            policy: ExtensionPolicy::default(),
        }
    }
}

impl From<&Opts> for CrawlOpts {
    fn from(o: &Opts) -> Self {
        CrawlOpts {
            courses: o.courses.clone(),
            sorted: o.sorted,
            use_cache: o.use_cache,
            log_course_details: o.log_course_details,
            strict: o.strict,
            max_in_flight: o.max_in_flight,
            policy: o.policy,
        }
    }
}
