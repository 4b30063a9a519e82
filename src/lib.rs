//! Lectern: course-catalog indexer for media libraries.
//!
//! Crawls a directory tree of courses (courses → topics → video files) into a
//! flat, serializable catalog, with mtime-based directory caching and a hard
//! cap on concurrently in-flight directory reads.

pub mod cache;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod crawl;
pub mod sort;
pub mod types;
pub mod utils;

pub use crawl::CourseIndexer;
pub use types::*;

use log::debug;
use std::path::Path;

/// Result alias used by the public lectern API.
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: crawl `root` with `opts` and return the catalog.
///
/// Builds a one-shot [`CourseIndexer`], so the directory cache starts cold and
/// is dropped with the call. Hold your own indexer instead when you want the
/// cache to survive across crawls in one process.
pub fn crawl_catalog(root: &Path, opts: &CrawlOpts) -> Result<Vec<Course>> {
    debug!("{} config: {:#?}", env!("CARGO_PKG_NAME"), opts);
    CourseIndexer::new().crawl(root, opts)
}
