//! Report pipeline
//!
//! Ties the collector and the renderers together. One call processes one
//! batch to completion and returns fully materialized artifacts; no state is
//! kept between calls.

use crate::cert_ops::collect_batch_on;
use crate::models::{BucketCounts, CertificateRecord, ExpiryThreshold, NamedInput};
use crate::report::{render_summary, ReportTable, SpreadsheetWriter, DEFAULT_SHEET_NAME};
use crate::utils::Result;
use chrono::{Local, NaiveDate};
use tracing::info;

/// Options for a report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub threshold: ExpiryThreshold,
    pub sheet_name: String,
}

impl ReportOptions {
    pub fn new(threshold: ExpiryThreshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            threshold: ExpiryThreshold::default(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

/// Artifacts produced for one batch
#[derive(Debug, Clone)]
pub struct CertificateReport {
    /// Parsed records in collection order
    pub records: Vec<CertificateRecord>,
    /// Alert text listing certificates inside the threshold window
    pub summary: String,
    /// xlsx workbook bytes, `None` when no certificate was found
    pub spreadsheet: Option<Vec<u8>>,
    pub counts: BucketCounts,
    pub threshold: ExpiryThreshold,
}

impl CertificateReport {
    /// True when no input contained a readable certificate
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Report table in output order
    pub fn table(&self) -> ReportTable {
        ReportTable::build(&self.records, self.threshold)
    }
}

/// Run the pipeline using the local date as "today"
pub fn generate_report(inputs: &[NamedInput], options: &ReportOptions) -> Result<CertificateReport> {
    generate_report_on(inputs, options, Local::now().date_naive())
}

/// Run the pipeline against an explicit "today"
pub fn generate_report_on(
    inputs: &[NamedInput],
    options: &ReportOptions,
    today: NaiveDate,
) -> Result<CertificateReport> {
    let records = collect_batch_on(inputs, today);
    let summary = render_summary(&records, options.threshold);
    let counts = BucketCounts::tally(&records, options.threshold);

    let spreadsheet = if records.is_empty() {
        None
    } else {
        let table = ReportTable::build(&records, options.threshold);
        Some(SpreadsheetWriter::new(options.sheet_name.as_str()).render(&table)?)
    };

    info!(
        inputs = inputs.len(),
        certificates = counts.total,
        expired = counts.expired,
        expiring_soon = counts.expiring_soon,
        threshold = options.threshold.days(),
        "Certificate report generated"
    );

    Ok(CertificateReport {
        records,
        summary,
        spreadsheet,
        counts,
        threshold: options.threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ALL_CLEAR_MESSAGE;

    #[test]
    fn test_empty_batch_has_no_spreadsheet() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let inputs = vec![
            NamedInput::new("notes.txt", b"hello".to_vec()),
            NamedInput::new("broken.zip", b"not a zip".to_vec()),
            NamedInput::new("broken.pem", b"not a cert".to_vec()),
        ];

        let report = generate_report_on(&inputs, &ReportOptions::default(), today).unwrap();

        assert!(report.is_empty());
        assert!(report.spreadsheet.is_none());
        assert_eq!(report.summary, ALL_CLEAR_MESSAGE);
        assert_eq!(report.counts, BucketCounts::default());
    }

    #[test]
    fn test_options_default() {
        let options = ReportOptions::default();
        assert_eq!(options.threshold.days(), 30);
        assert_eq!(options.sheet_name, "Certificate report");
    }
}
