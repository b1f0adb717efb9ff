//! Summary text for the "needs attention" set
//!
//! Only certificates in the expiring-soon window are listed. Expired and
//! comfortably valid certificates show up in the spreadsheet only.

use crate::models::{CertificateRecord, ExpiryBucket, ExpiryThreshold};

/// Sentence used when nothing is about to expire
pub const ALL_CLEAR_MESSAGE: &str = "All certificates are valid or have a long validity period.";

/// Render one summary line
pub fn summary_line(record: &CertificateRecord) -> String {
    format!(
        "{} — {} (days remaining: {})",
        record.subject_name,
        record.valid_until_display(),
        record.days_remaining
    )
}

/// Build the summary text, keeping input order
pub fn render_summary(records: &[CertificateRecord], threshold: ExpiryThreshold) -> String {
    let lines: Vec<String> = records
        .iter()
        .filter(|r| r.bucket(threshold) == ExpiryBucket::ExpiringSoon)
        .map(summary_line)
        .collect();

    if lines.is_empty() {
        ALL_CLEAR_MESSAGE.to_string()
    } else {
        lines.join("\n")
    }
}
