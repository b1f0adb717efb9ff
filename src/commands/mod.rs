//! Command implementations for cert-report

pub mod report;

pub use report::{read_inputs, run_report, write_spreadsheet, LoadedInputs, SkipReason};
