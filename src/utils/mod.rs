pub mod config;
pub mod logger;
pub mod settings;

pub use config::*;
pub use logger::setup_logging;
