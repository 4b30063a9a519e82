//! Shared crawl state passed into the recursive collectors.

use log::warn;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::cache::DirCache;
use crate::types::{CrawlOpts, Topic};

/// Shared context for one crawl invocation. The mutexed fields are the only
/// mutable state touched from worker threads.
pub struct CrawlContext<'a> {
    pub opts: &'a CrawlOpts,
    pub cache: &'a DirCache<Vec<Topic>>,
    /// Directories whose read failed, with the error text. Each failure is
    /// warned at the point of failure; the total is summarized after the crawl.
    pub skipped: Mutex<Vec<(PathBuf, String)>>,
    /// First read error. Recorded only in strict mode; the crawl fails on it
    /// once the tree has been walked.
    pub first_error: Mutex<Option<String>>,
}

impl<'a> CrawlContext<'a> {
    pub fn new(opts: &'a CrawlOpts, cache: &'a DirCache<Vec<Topic>>) -> Self {
        Self {
            opts,
            cache,
            skipped: Mutex::new(Vec::new()),
            first_error: Mutex::new(None),
        }
    }

    /// Record a failed directory read. The failing branch contributes zero
    /// topics either way; strict mode additionally keeps the first error for
    /// the crawl to fail on, otherwise the path is skipped and logged.
    pub fn record_read_error(&self, path: &Path, err: &anyhow::Error) {
        warn!("cannot read {}: {:#}", path.display(), err);
        if self.opts.strict {
            let mut slot = self.first_error.lock().unwrap();
            slot.get_or_insert_with(|| format!("{}: {:#}", path.display(), err));
        } else {
            self.skipped
                .lock()
                .unwrap()
                .push((path.to_path_buf(), format!("{err:#}")));
        }
    }
}
