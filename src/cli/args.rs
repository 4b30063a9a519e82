use clap::Parser;
use std::path::PathBuf;

use crate::classify::ExtensionPolicy;

/// Course-catalog indexer for media libraries.
#[derive(Clone, Parser)]
#[command(name = "lectern")]
#[command(about = "Crawl a course directory tree into a JSON catalog.")]
pub struct Cli {
    /// Root courses directory. Default: $LECTERN_ROOT or the settings file.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Catalog output path. Default: `courses.json` in the working directory.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Restrict the crawl to these exact course names. Makes the crawl
    /// incremental: results merge into the existing catalog instead of
    /// replacing it.
    #[arg(long, short = 'c', num_args = 1..)]
    pub courses: Vec<String>,

    /// Sort topics and files with numeric-aware ordering.
    #[arg(long, short, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub sorted: Option<bool>,

    /// Reuse cached directory results while their mtimes are unchanged.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub cache: Option<bool>,

    /// Log one summary line per indexed course.
    #[arg(long, short = 'd', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub details: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Strict mode: fail on the first unreadable directory instead of skipping.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub strict: Option<bool>,

    /// Cap on simultaneously in-flight directory reads.
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// File inclusion policy.
    #[arg(long, value_enum)]
    pub policy: Option<ExtensionPolicy>,
}
