//! Application configuration constants.
//! Tuning and fixed names in one place.

use std::sync::OnceLock;

/// Directory name excluded from every crawl, at any depth (exact match).
pub const EXCLUDED_DIR_NAME: &str = "0. Websites you may like";

/// Fixed catalog artifact name, written to the working directory unless
/// overridden.
pub const CATALOG_FILENAME: &str = "courses.json";

// ---- Fan-out ----

/// Bounds for the crawl worker pool.
pub struct FanOutLimits;

impl FanOutLimits {
    /// Default cap on simultaneously in-flight directory reads.
    pub const DEFAULT_MAX_IN_FLIGHT: usize = 50;
    /// Lower bound; a zero-thread pool cannot make progress.
    pub const FLOOR: usize = 1;
}

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    root_env_var: String,
    settings_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                root_env_var: format!("{}_ROOT", pkg.to_uppercase()),
                settings_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Environment variable naming the root courses directory.
    pub fn root_env_var(&self) -> &str {
        &self.root_env_var
    }

    /// Settings file looked up in the working directory.
    pub fn settings_filename(&self) -> &str {
        &self.settings_filename
    }
}
