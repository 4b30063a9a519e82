use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Route crate logs through env_logger with a compact colored prefix.
/// Verbose switches this crate's filter from Info to Debug; dependencies stay
/// at Warn.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME").cyan();
            let line = match record.level() {
                Level::Warn => format!("[{} {}] {}", name, "WARN".yellow(), record.args()),
                Level::Error => format!("[{} {}] {}", name, "ERROR".red(), record.args()),
                _ => format!("[{}] {}", name, record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}
