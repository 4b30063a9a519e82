//! Course building: the root-level pass over the catalog tree.

use log::{debug, info};
use rayon::prelude::*;
use std::path::Path;

use super::context::CrawlContext;
use super::read::{list_dir, partition_entries};
use super::topics::collect_topics;
use crate::classify::classify;
use crate::types::{Course, Topic};
use crate::utils::config::EXCLUDED_DIR_NAME;

/// Build every course under `root`: one per immediate subdirectory, optionally
/// restricted to an exact-name allow-list. Courses that classify to zero
/// topics are dropped. A root read error yields zero courses.
pub fn build_courses(ctx: &CrawlContext, root: &Path) -> Vec<Course> {
    let entries = match list_dir(root) {
        Ok(e) => e,
        Err(err) => {
            ctx.record_read_error(root, &err);
            return Vec::new();
        }
    };
    let (_, mut dirs) = partition_entries(entries, EXCLUDED_DIR_NAME);
    if let Some(wanted) = &ctx.opts.courses {
        dirs.retain(|d| wanted.iter().any(|w| w == d));
    }

    dirs.par_iter()
        .filter_map(|name| build_course(ctx, &root.join(name), name))
        .collect()
}

/// Build one course. A course without subdirectories folds its files into a
/// single topicless topic; otherwise the recursive collector takes over from
/// the course root. An unreadable course is logged and skipped.
fn build_course(ctx: &CrawlContext, dir: &Path, name: &str) -> Option<Course> {
    let entries = match list_dir(dir) {
        Ok(e) => e,
        Err(err) => {
            ctx.record_read_error(dir, &err);
            return None;
        }
    };
    let (files, dirs) = partition_entries(entries, EXCLUDED_DIR_NAME);

    let topics = if dirs.is_empty() {
        let classified: Vec<_> = files
            .iter()
            .filter_map(|f| classify(f, ctx.opts.policy))
            .collect();
        if classified.is_empty() {
            Vec::new()
        } else {
            vec![Topic {
                name: name.to_string(),
                files: classified,
                is_topic_less: true,
            }]
        }
    } else {
        collect_topics(ctx, dir, "")
    };

    if topics.is_empty() {
        debug!("course {name}: no topics after classification, dropping");
        return None;
    }
    if ctx.opts.log_course_details {
        let file_count: usize = topics.iter().map(|t| t.files.len()).sum();
        info!("course {name}: {} topics, {file_count} files", topics.len());
    }
    Some(Course {
        name: name.to_string(),
        topics,
    })
}
