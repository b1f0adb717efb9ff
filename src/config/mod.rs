//! Configuration module for cert-report
//!
//! Handles loading settings from TOML files. Settings are turned into a
//! [`ReportOptions`](crate::runner::ReportOptions) value that is passed to
//! each pipeline call; nothing here is global.

pub mod settings;

pub use settings::{InputSettings, ReportSettings, Settings, DEFAULT_MAX_FILE_SIZE};

use crate::utils::ConfigError;
use std::path::Path;

/// Load settings from an explicit file, or from the default location
pub fn load_settings<P: AsRef<Path>>(path: Option<P>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_default(),
    }
}
