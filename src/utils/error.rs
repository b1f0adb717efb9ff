//! Custom error types for cert-report
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of the certificate report pipeline. Only configuration
//! and report serialization errors ever reach a caller; certificate and
//! archive errors are logged and turned into "no records".

use thiserror::Error;

/// Top-level error type for cert-report
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report generation error: {0}")]
    Report(#[from] ReportError),
}

/// Certificate parsing errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Failed to parse PEM certificate: {message}")]
    PemError { message: String },

    #[error("Failed to parse DER certificate: {message}")]
    DerError { message: String },

    #[error("Invalid {field} time in certificate")]
    InvalidTime { field: &'static str },

    #[error("Unsupported certificate format: {format}")]
    UnsupportedFormat { format: String },
}

/// Zip archive errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to open archive {name}: {message}")]
    OpenFailed { name: String, message: String },

    #[error("Failed to read entry {entry} from {name}: {message}")]
    EntryReadFailed {
        name: String,
        entry: String,
        message: String,
    },

    #[error("Entry {entry} in {name} exceeds {limit} bytes when decompressed")]
    EntryTooLarge {
        name: String,
        entry: String,
        limit: u64,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Spreadsheet generation failed: {message}")]
    Spreadsheet { message: String },

    #[error("Failed to write report to {path}: {message}")]
    WriteError { path: String, message: String },
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Spreadsheet {
            message: err.to_string(),
        }
    }
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_to_toolkit_error() {
        let err: ToolkitError = ConfigError::InvalidValue {
            key: "threshold_days".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration value for threshold_days: must be greater than zero"
        );
    }

    #[test]
    fn test_report_error_converts_to_toolkit_error() {
        let err: ToolkitError = ReportError::WriteError {
            path: "out.xlsx".to_string(),
            message: "permission denied".to_string(),
        }
        .into();

        assert!(matches!(err, ToolkitError::Report(ReportError::WriteError { .. })));
        assert_eq!(
            err.to_string(),
            "Report generation error: Failed to write report to out.xlsx: permission denied"
        );
    }

    #[test]
    fn test_archive_entry_too_large_message() {
        let err = ArchiveError::EntryTooLarge {
            name: "bundle.zip".to_string(),
            entry: "huge.pem".to_string(),
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "Entry huge.pem in bundle.zip exceeds 1024 bytes when decompressed"
        );
    }

    #[test]
    fn test_certificate_error_messages() {
        let err = CertificateError::InvalidTime { field: "notAfter" };
        assert_eq!(err.to_string(), "Invalid notAfter time in certificate");
    }
}
