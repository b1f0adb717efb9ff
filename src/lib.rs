//! cert-report library
//!
//! Turns a batch of certificate files into an expiry report:
//! - PEM / DER X.509 parsing into flat certificate records
//! - Zip bundle expansion
//! - Expiry classification against a day threshold
//! - Summary text for certificates that need attention
//! - xlsx report with color-coded rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use cert_report::{generate_report, NamedInput, ReportOptions};
//!
//! let inputs = vec![NamedInput::new("user.cer", std::fs::read("user.cer")?)];
//! let report = generate_report(&inputs, &ReportOptions::default())?;
//! println!("{}", report.summary);
//! if let Some(xlsx) = report.spreadsheet {
//!     std::fs::write("certificates_report.xlsx", xlsx)?;
//! }
//! ```

pub mod cert_ops;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{CertificateRecord, ExpiryBucket, ExpiryThreshold, NamedInput};
pub use runner::{generate_report, generate_report_on, CertificateReport, ReportOptions};
pub use utils::{Result, ToolkitError};
