//! Tabular report model
//!
//! Rows are rendered to strings here so that the spreadsheet writer and the
//! terminal table share the same ordering, formatting and column widths.

use crate::models::{CertificateRecord, ExpiryBucket, ExpiryThreshold};

/// Column headers, in output order
pub const REPORT_HEADERS: [&str; 6] = [
    "Name",
    "Organization",
    "Serial number",
    "Valid from",
    "Valid until",
    "Days remaining",
];

/// Extra characters added to the longest value of each column
pub const COLUMN_PADDING: usize = 2;

/// One rendered report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub cells: [String; 6],
    pub days_remaining: i64,
    pub bucket: ExpiryBucket,
}

impl ReportRow {
    fn from_record(record: &CertificateRecord, threshold: ExpiryThreshold) -> Self {
        Self {
            cells: [
                record.subject_name.clone(),
                record.organization_name.clone(),
                record.serial_number.clone(),
                record.valid_from_display(),
                record.valid_until_display(),
                record.days_remaining.to_string(),
            ],
            days_remaining: record.days_remaining,
            bucket: record.bucket(threshold),
        }
    }
}

/// Full report, sorted soonest-expiring first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Build the table. The sort on `valid_until` is stable, so ties keep
    /// their input order.
    pub fn build(records: &[CertificateRecord], threshold: ExpiryThreshold) -> Self {
        let mut sorted: Vec<&CertificateRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.valid_until);

        Self {
            rows: sorted
                .into_iter()
                .map(|r| ReportRow::from_record(r, threshold))
                .collect(),
        }
    }

    pub fn headers(&self) -> [&'static str; 6] {
        REPORT_HEADERS
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of each column: longest value (header included) plus padding
    pub fn column_widths(&self) -> [usize; 6] {
        let mut widths = REPORT_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths.map(|w| w + COLUMN_PADDING)
    }
}
