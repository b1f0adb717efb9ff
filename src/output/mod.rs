//! Output formatting module
//!
//! Provides the CLI's output formats:
//! - Rich terminal output with colors and tables
//! - JSON export

pub mod json;
pub mod tables;
pub mod terminal;

pub use json::{print_json, to_json_output, JsonOutput};
pub use tables::{format_report_table, print_report_table};
pub use terminal::{
    print_batch_summary, print_error, print_header, print_success, print_summary, print_warning,
};
