//! Spreadsheet (xlsx) serialization of the report table

use crate::models::ExpiryBucket;
use crate::report::table::ReportTable;
use crate::utils::ReportError;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook};

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Certificate report";

/// Longest worksheet name Excel accepts, in characters
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel rejects in worksheet names
pub const INVALID_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Explain why `name` cannot be used as a worksheet name, if it cannot
pub fn sheet_name_problem(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("must not be empty".to_string());
    }
    let len = name.chars().count();
    if len > MAX_SHEET_NAME_LEN {
        return Some(format!(
            "is {} characters long, the limit is {}",
            len, MAX_SHEET_NAME_LEN
        ));
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
        return Some(format!("must not contain '{}'", c));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Some("must not start or end with an apostrophe".to_string());
    }
    if name.eq_ignore_ascii_case("History") {
        return Some("'History' is reserved by Excel".to_string());
    }
    None
}

/// Row fill for expired certificates
pub const EXPIRED_FILL: u32 = 0xFFCCCC;
/// Row fill for certificates inside the threshold window
pub const EXPIRING_FILL: u32 = 0xFFDDAA;
/// Row fill for everything else
pub const VALID_FILL: u32 = 0xCCFFCC;

/// Fill color for a bucket
pub fn bucket_fill(bucket: ExpiryBucket) -> u32 {
    match bucket {
        ExpiryBucket::Expired => EXPIRED_FILL,
        ExpiryBucket::ExpiringSoon => EXPIRING_FILL,
        ExpiryBucket::Valid => VALID_FILL,
    }
}

/// Writes a [`ReportTable`] to an in-memory xlsx workbook
pub struct SpreadsheetWriter {
    sheet_name: String,
}

impl SpreadsheetWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    /// Serialize the table, returning the workbook bytes
    pub fn render(&self, table: &ReportTable) -> Result<Vec<u8>, ReportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        let header_format = Format::new().set_bold();
        for (col, header) in table.headers().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, row) in table.rows.iter().enumerate() {
            let row_num = index as u32 + 1;
            let format = Format::new()
                .set_pattern(FormatPattern::Solid)
                .set_background_color(Color::RGB(bucket_fill(row.bucket)));

            for (col, cell) in row.cells.iter().take(5).enumerate() {
                worksheet.write_string_with_format(row_num, col as u16, cell, &format)?;
            }
            worksheet.write_number_with_format(row_num, 5, row.days_remaining as f64, &format)?;
        }

        for (col, width) in table.column_widths().iter().enumerate() {
            worksheet.set_column_width(col as u16, *width as f64)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl Default for SpreadsheetWriter {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}
