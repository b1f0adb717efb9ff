//! Certificate record and expiry classification types

use crate::utils::ConfigError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Placeholder used when a subject attribute is absent
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Date format used in the summary text and the tabular report
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Default "expiring soon" window in days
pub const DEFAULT_THRESHOLD_DAYS: u32 = 30;

/// One parsed certificate
///
/// Records are created per invocation and never persisted, so
/// `days_remaining` always reflects the date the record was extracted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateRecord {
    /// Subject common name
    pub subject_name: String,
    /// Subject organization
    pub organization_name: String,
    /// Serial number as uppercase hex without prefix or padding
    pub serial_number: String,
    /// Not valid before (UTC calendar date)
    pub valid_from: NaiveDate,
    /// Not valid after (UTC calendar date)
    pub valid_until: NaiveDate,
    /// `valid_until - today`, negative once expired
    pub days_remaining: i64,
}

impl CertificateRecord {
    /// Build a record, deriving `days_remaining` from `today`
    pub fn new(
        subject_name: impl Into<String>,
        organization_name: impl Into<String>,
        serial_number: impl Into<String>,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        Self {
            subject_name: subject_name.into(),
            organization_name: organization_name.into(),
            serial_number: serial_number.into(),
            valid_from,
            valid_until,
            days_remaining: (valid_until - today).num_days(),
        }
    }

    /// Classify this record against a threshold
    pub fn bucket(&self, threshold: ExpiryThreshold) -> ExpiryBucket {
        ExpiryBucket::classify(self.days_remaining, threshold)
    }

    pub fn valid_from_display(&self) -> String {
        self.valid_from.format(DATE_FORMAT).to_string()
    }

    pub fn valid_until_display(&self) -> String {
        self.valid_until.format(DATE_FORMAT).to_string()
    }
}

/// Expiry urgency class of a certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryBucket {
    /// `days_remaining < 0`
    Expired,
    /// `0 <= days_remaining <= threshold`
    ExpiringSoon,
    /// `days_remaining > threshold`
    Valid,
}

impl ExpiryBucket {
    /// Map a day count to its bucket. Both ends of the window are inclusive.
    pub fn classify(days_remaining: i64, threshold: ExpiryThreshold) -> Self {
        if days_remaining < 0 {
            ExpiryBucket::Expired
        } else if days_remaining <= threshold.days() {
            ExpiryBucket::ExpiringSoon
        } else {
            ExpiryBucket::Valid
        }
    }
}

impl fmt::Display for ExpiryBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryBucket::Expired => write!(f, "Expired"),
            ExpiryBucket::ExpiringSoon => write!(f, "Expiring soon"),
            ExpiryBucket::Valid => write!(f, "Valid"),
        }
    }
}

/// Number of days that defines the "expiring soon" window
///
/// Always strictly positive; construct it with [`ExpiryThreshold::new`] at the
/// edge where user input arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpiryThreshold(u32);

impl ExpiryThreshold {
    pub fn new(days: i64) -> Result<Self, ConfigError> {
        if days <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "threshold_days".to_string(),
                message: format!("must be a positive number of days, got {}", days),
            });
        }

        u32::try_from(days)
            .map(Self)
            .map_err(|_| ConfigError::InvalidValue {
                key: "threshold_days".to_string(),
                message: format!("{} days is out of range", days),
            })
    }

    pub fn days(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for ExpiryThreshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_DAYS)
    }
}

impl fmt::Display for ExpiryThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// Per-bucket record counts for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub total: usize,
    pub expired: usize,
    pub expiring_soon: usize,
    pub valid: usize,
}

impl BucketCounts {
    pub fn tally(records: &[CertificateRecord], threshold: ExpiryThreshold) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut counts, record| {
                counts.total += 1;
                match record.bucket(threshold) {
                    ExpiryBucket::Expired => counts.expired += 1,
                    ExpiryBucket::ExpiringSoon => counts.expiring_soon += 1,
                    ExpiryBucket::Valid => counts.valid += 1,
                }
                counts
            })
    }
}
