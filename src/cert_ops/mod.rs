//! Certificate file operations module
//!
//! Reads PEM and DER certificates into records and expands zip bundles
//! into batches of records.

pub mod collector;
pub mod reader;

pub use collector::{collect_batch, collect_batch_on, collect_records_on};
pub use reader::{
    detect_format_from_bytes, extract_record, extract_record_on, parse_record, DetectedFormat,
};
