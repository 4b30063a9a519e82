//! Layered settings for the CLI: `.lectern.toml` in the working directory,
//! then the environment (`.env` via dotenvy, `LECTERN_ROOT`), then CLI flags
//! on top. The lib does not use this; embedding programs inject config via
//! [`CrawlOpts`](crate::types::CrawlOpts).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::classify::ExtensionPolicy;
use crate::types::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Deserialize)]
pub(crate) struct SettingsFile {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    root: Option<String>,
    output: Option<String>,
    sorted: Option<bool>,
    cache: Option<bool>,
    details: Option<bool>,
    strict: Option<bool>,
    jobs: Option<usize>,
    policy: Option<ExtensionPolicy>,
}

/// Load the settings file from `dir` if present. Returns None if the file is
/// missing or unreadable; a file that parses badly is warned about and ignored.
pub(crate) fn load_settings(dir: &Path) -> Option<SettingsFile> {
    let path = dir.join(PackagePaths::get().settings_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    toml::from_str(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

/// Overwrite an opts field from the file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(v) = $sec.$sec_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file settings to `opts` (only fields present in the file) and return
/// the file-configured root, if any. Call before applying CLI flags.
pub(crate) fn apply_file_to_opts(file: &SettingsFile, opts: &mut Opts) -> Option<PathBuf> {
    let sec = &file.settings;
    if let Some(ref p) = sec.output {
        opts.output = Some(PathBuf::from(p));
    }
    apply_file_opt!(sec, opts, sorted => sorted);
    apply_file_opt!(sec, opts, cache => use_cache);
    apply_file_opt!(sec, opts, details => log_course_details);
    apply_file_opt!(sec, opts, strict => strict);
    if let Some(jobs) = sec.jobs {
        opts.max_in_flight = Some(jobs);
    }
    apply_file_opt!(sec, opts, policy => policy);
    sec.root.as_ref().map(PathBuf::from)
}

/// Root directory from the environment, after loading `.env` from the working
/// directory.
pub(crate) fn root_from_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok();
    std::env::var(PackagePaths::get().root_env_var())
        .ok()
        .map(PathBuf::from)
}
