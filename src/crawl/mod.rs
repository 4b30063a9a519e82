//! The crawl: root validation, bounded fan-out, topic collection, course
//! assembly.

pub mod context;
pub mod courses;
pub mod limiter;
pub mod read;
pub mod topics;

pub use context::CrawlContext;
pub use courses::build_courses;
pub use limiter::FanOut;
pub use read::{EntryKind, RawEntry, list_dir, partition_entries, validate_root};
pub use topics::collect_topics;

use anyhow::{Result, bail};
use log::{debug, warn};
use std::path::Path;

use crate::cache::DirCache;
use crate::sort::sort_catalog;
use crate::types::{Course, CrawlOpts, Topic};

/// The indexer. Owns the directory cache so repeated crawls in one process
/// reuse unchanged subtrees; keep one alive across crawls, or call
/// [`cache()`](Self::cache)`.clear()` to reset it deterministically.
#[derive(Default)]
pub struct CourseIndexer {
    cache: DirCache<Vec<Topic>>,
}

impl CourseIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &DirCache<Vec<Topic>> {
        &self.cache
    }

    /// Crawl `root` into a catalog. An invalid root logs the reason and
    /// yields an empty catalog; the persister decides whether that is fatal.
    pub fn crawl(&self, root: &Path, opts: &CrawlOpts) -> Result<Vec<Course>> {
        if !read::validate_root(root) {
            return Ok(Vec::new());
        }
        // Cache keys must be absolute so crawls from different working
        // directories hit the same entries.
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let fan_out = FanOut::new(opts.max_in_flight)?;
        debug!(
            "crawling {} with {} read slots",
            root.display(),
            fan_out.cap()
        );

        let ctx = CrawlContext::new(opts, &self.cache);
        let mut courses = fan_out.install(|| build_courses(&ctx, &root));

        if opts.strict
            && let Some(msg) = ctx.first_error.lock().unwrap().take()
        {
            bail!("{msg}");
        }
        let skipped = ctx.skipped.lock().unwrap();
        if !skipped.is_empty() {
            warn!("skipped {} unreadable directories", skipped.len());
        }
        drop(skipped);

        if opts.sorted {
            sort_catalog(&mut courses);
        }
        Ok(courses)
    }
}
