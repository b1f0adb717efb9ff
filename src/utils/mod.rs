//! Utility modules for cert-report
//!
//! This module contains the error types shared across the crate.

pub mod error;

pub use error::{ArchiveError, CertificateError, ConfigError, ReportError, Result, ToolkitError};
