//! Application settings configuration
//!
//! Defines the expiry threshold, report naming and input limits.

use crate::models::{ExpiryThreshold, DEFAULT_THRESHOLD_DAYS};
use crate::report::{sheet_name_problem, DEFAULT_REPORT_FILE_NAME, DEFAULT_SHEET_NAME};
use crate::runner::ReportOptions;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Largest input file accepted by default (20 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Report settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_threshold_days")]
    pub threshold_days: i64,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_threshold_days() -> i64 {
    i64::from(DEFAULT_THRESHOLD_DAYS)
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

fn default_file_name() -> String {
    DEFAULT_REPORT_FILE_NAME.to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            threshold_days: default_threshold_days(),
            sheet_name: default_sheet_name(),
            file_name: default_file_name(),
        }
    }
}

/// Input limits
#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub input: InputSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Build pipeline options, letting an explicit threshold win over the file
    pub fn report_options(&self, threshold_override: Option<i64>) -> Result<ReportOptions, ConfigError> {
        let threshold = ExpiryThreshold::new(threshold_override.unwrap_or(self.report.threshold_days))?;

        if let Some(message) = sheet_name_problem(&self.report.sheet_name) {
            return Err(ConfigError::InvalidValue {
                key: "report.sheet_name".to_string(),
                message,
            });
        }

        Ok(ReportOptions {
            threshold,
            sheet_name: self.report.sheet_name.clone(),
        })
    }
}
