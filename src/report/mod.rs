//! Report generation module
//!
//! Renders the summary text, the sorted report table and its xlsx form.

pub mod summary;
pub mod table;
pub mod xlsx;

pub use summary::{render_summary, summary_line, ALL_CLEAR_MESSAGE};
pub use table::{ReportRow, ReportTable, COLUMN_PADDING, REPORT_HEADERS};
pub use xlsx::{
    bucket_fill, sheet_name_problem, SpreadsheetWriter, DEFAULT_SHEET_NAME, MAX_SHEET_NAME_LEN,
};

/// Default file name for the spreadsheet attachment
pub const DEFAULT_REPORT_FILE_NAME: &str = "certificates_report.xlsx";
