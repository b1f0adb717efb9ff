//! JSON output formatter

use crate::models::{BucketCounts, CertificateRecord, ExpiryBucket};
use crate::runner::CertificateReport;
use serde::Serialize;

/// One record with its bucket, as emitted in JSON
#[derive(Serialize)]
pub struct JsonRecord<'a> {
    #[serde(flatten)]
    pub record: &'a CertificateRecord,
    pub bucket: ExpiryBucket,
}

/// JSON-serializable output structure
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub threshold_days: i64,
    pub summary: &'a str,
    pub counts: BucketCounts,
    /// Records in report order (soonest expiry first)
    pub certificates: Vec<JsonRecord<'a>>,
    pub spreadsheet: Option<String>,
}

/// Build the JSON view of a report. `spreadsheet` is the path the workbook
/// was written to, if any.
pub fn to_json_output<'a>(report: &'a CertificateReport, spreadsheet: Option<String>) -> JsonOutput<'a> {
    let mut certificates: Vec<JsonRecord<'a>> = report
        .records
        .iter()
        .map(|record| JsonRecord {
            record,
            bucket: record.bucket(report.threshold),
        })
        .collect();
    certificates.sort_by_key(|c| c.record.valid_until);

    JsonOutput {
        threshold_days: report.threshold.days(),
        summary: &report.summary,
        counts: report.counts,
        certificates,
        spreadsheet,
    }
}

/// Print a report as JSON to stdout
pub fn print_json(report: &CertificateReport, spreadsheet: Option<String>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&to_json_output(report, spreadsheet))?;
    println!("{}", json);
    Ok(())
}
