//! Topic collection: the recursive, cached, bounded walk of one course subtree.

use log::debug;
use rayon::prelude::*;
use std::path::Path;

use super::context::CrawlContext;
use super::read::{list_dir, partition_entries};
use crate::cache::dir_mtime_ns;
use crate::classify::classify;
use crate::types::Topic;
use crate::utils::config::EXCLUDED_DIR_NAME;

/// Collect every topic under `dir`. `rel` is the `/`-joined path of `dir`
/// relative to the course root, empty at the course root itself.
///
/// Returns the directory's own topic (when it directly holds classified files)
/// followed by all topics found below it, one per directory with files at any
/// depth, so a course may mix shallow and deep topics. A valid cache entry
/// short-circuits the whole subtree; a read error contributes zero topics
/// without touching siblings or ancestors.
pub fn collect_topics(ctx: &CrawlContext, dir: &Path, rel: &str) -> Vec<Topic> {
    let mtime_ns = match dir_mtime_ns(dir) {
        Ok(m) => m,
        Err(err) => {
            ctx.record_read_error(dir, &err);
            return Vec::new();
        }
    };
    if ctx.opts.use_cache
        && let Some(topics) = ctx.cache.get_fresh(dir, mtime_ns)
    {
        debug!("cache hit for {}", dir.display());
        return topics;
    }

    let entries = match list_dir(dir) {
        Ok(e) => e,
        Err(err) => {
            ctx.record_read_error(dir, &err);
            return Vec::new();
        }
    };
    let (files, dirs) = partition_entries(entries, EXCLUDED_DIR_NAME);

    let mut topics = Vec::new();
    let classified: Vec<_> = files
        .iter()
        .filter_map(|f| classify(f, ctx.opts.policy))
        .collect();
    if !classified.is_empty() {
        let name = if rel.is_empty() {
            dir_basename(dir)
        } else {
            rel.to_string()
        };
        topics.push(Topic {
            name,
            files: classified,
            is_topic_less: false,
        });
    }

    let nested: Vec<Vec<Topic>> = dirs
        .par_iter()
        .map(|sub| {
            let child_rel = if rel.is_empty() {
                sub.clone()
            } else {
                format!("{rel}/{sub}")
            };
            collect_topics(ctx, &dir.join(sub), &child_rel)
        })
        .collect();
    topics.extend(nested.into_iter().flatten());

    if ctx.opts.use_cache {
        ctx.cache.put(dir, mtime_ns, topics.clone());
    }
    topics
}

fn dir_basename(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
