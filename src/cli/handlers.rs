//! CLI command handler: resolve layered settings, crawl, persist.

use anyhow::{Result, bail};
use colored::Colorize;
use log::info;
use std::path::{Path, PathBuf};

use crate::CourseIndexer;
use crate::catalog::{PersistOutcome, persist_full, persist_incremental};
use crate::cli::args::Cli;
use crate::types::{CrawlOpts, Opts};
use crate::utils::config::{CATALOG_FILENAME, PackagePaths};
use crate::utils::settings::{apply_file_to_opts, load_settings, root_from_env};
use crate::utils::setup_logging;

/// Merge defaults, settings file, environment, and CLI flags into
/// `(root, opts)`. Precedence rises in that order; the root must come from
/// somewhere.
fn resolve(cli: &Cli) -> Result<(PathBuf, Opts)> {
    let mut opts = Opts::default();
    let mut root = None;

    if let Some(file) = load_settings(Path::new(".")) {
        if let Some(file_root) = apply_file_to_opts(&file, &mut opts) {
            root = Some(file_root);
        }
    }
    if let Some(env_root) = root_from_env() {
        root = Some(env_root);
    }

    if let Some(v) = cli.sorted {
        opts.sorted = v;
    }
    if let Some(v) = cli.cache {
        opts.use_cache = v;
    }
    if let Some(v) = cli.details {
        opts.log_course_details = v;
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    if let Some(v) = cli.strict {
        opts.strict = v;
    }
    if let Some(v) = cli.jobs {
        opts.max_in_flight = Some(v);
    }
    if let Some(v) = cli.policy {
        opts.policy = v;
    }
    if !cli.courses.is_empty() {
        opts.courses = Some(cli.courses.clone());
    }
    if let Some(o) = &cli.output {
        opts.output = Some(o.clone());
    }
    if let Some(d) = &cli.dir {
        root = Some(d.clone());
    }

    let Some(root) = root else {
        bail!(
            "no root directory: pass DIR, set {}, or add root to the settings file",
            PackagePaths::get().root_env_var()
        );
    };
    Ok((root, opts))
}

/// Run one crawl-and-persist cycle. An explicit course filter makes the
/// persist incremental; everything else replaces the catalog wholesale.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose.unwrap_or(false));
    let (root, opts) = resolve(cli)?;
    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(CATALOG_FILENAME));

    let crawl_opts = CrawlOpts::from(&opts);
    let incremental = crawl_opts.courses.is_some();
    let indexer = CourseIndexer::new();
    let courses = indexer.crawl(&root, &crawl_opts)?;

    let topic_count: usize = courses.iter().map(|c| c.topics.len()).sum();
    info!("indexed {} courses, {} topics", courses.len(), topic_count);

    let outcome = if incremental {
        persist_incremental(&output, courses)?
    } else {
        persist_full(&output, courses)?
    };
    match outcome {
        PersistOutcome::Written(count) => {
            println!(
                "{} {} courses -> {}",
                "catalog:".green(),
                count,
                output.display()
            );
        }
        PersistOutcome::PreservedExisting => {
            println!("{} kept existing {}", "catalog:".yellow(), output.display());
        }
    }
    Ok(())
}
