//! Data models for cert-report
//!
//! This module contains the data structures that flow through the pipeline.

pub mod certificate;
pub mod input;

pub use certificate::{
    BucketCounts, CertificateRecord, ExpiryBucket, ExpiryThreshold, DATE_FORMAT,
    DEFAULT_THRESHOLD_DAYS, UNKNOWN_FIELD,
};
pub use input::{
    accepted_extensions, is_certificate_name, InputKind, NamedInput, ARCHIVE_EXTENSION,
    CERTIFICATE_EXTENSIONS,
};
