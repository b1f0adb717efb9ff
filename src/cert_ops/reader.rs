//! Certificate reading and field extraction
//!
//! Accepts PEM first and falls back to DER when the PEM attempt is rejected.
//! Anything that fails both becomes "no record" for the caller.

use crate::models::{CertificateRecord, UNKNOWN_FIELD};
use crate::utils::CertificateError;
use chrono::{Local, NaiveDate, TimeZone, Utc};
use tracing::{debug, warn};
use x509_parser::prelude::*;

/// Detected certificate encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    Pem,
    Der,
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedFormat::Pem => write!(f, "PEM"),
            DetectedFormat::Der => write!(f, "DER"),
        }
    }
}

/// Detect the encoding of a certificate blob by inspecting its contents
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DetectedFormat, CertificateError> {
    // Check for PEM markers
    if let Ok(text) = std::str::from_utf8(data) {
        if text.contains("-----BEGIN ") {
            return Ok(DetectedFormat::Pem);
        }
    }

    // ASN.1 SEQUENCE
    if data.first() == Some(&0x30) {
        return Ok(DetectedFormat::Der);
    }

    Err(CertificateError::UnsupportedFormat {
        format: "unknown (could not detect PEM or DER)".to_string(),
    })
}

/// Extract a record using the local wall-clock date as "today"
pub fn extract_record(data: &[u8]) -> Option<CertificateRecord> {
    extract_record_on(data, Local::now().date_naive())
}

/// Extract a record, computing `days_remaining` against `today`
///
/// Returns `None` when the blob is neither a PEM nor a DER certificate.
pub fn extract_record_on(data: &[u8], today: NaiveDate) -> Option<CertificateRecord> {
    match parse_record(data, today) {
        Ok(record) => {
            debug!(
                subject = %record.subject_name,
                serial = %record.serial_number,
                days_remaining = record.days_remaining,
                "Parsed certificate"
            );
            Some(record)
        }
        Err(e) => {
            warn!(error = %e, "Skipping unparseable certificate");
            None
        }
    }
}

/// Parse a certificate blob, PEM first, then DER
pub fn parse_record(data: &[u8], today: NaiveDate) -> Result<CertificateRecord, CertificateError> {
    match record_from_pem(data, today) {
        Ok(record) => Ok(record),
        Err(pem_err) => {
            debug!(error = %pem_err, "PEM rejected, trying DER");
            record_from_der(data, today)
        }
    }
}

fn record_from_pem(data: &[u8], today: NaiveDate) -> Result<CertificateRecord, CertificateError> {
    let der = read_pem_certificate(data)?;
    record_from_der(&der, today).map_err(|e| CertificateError::PemError {
        message: e.to_string(),
    })
}

/// Return the contents of the first CERTIFICATE block
fn read_pem_certificate(data: &[u8]) -> Result<Vec<u8>, CertificateError> {
    let pems = ::pem::parse_many(data).map_err(|e| CertificateError::PemError {
        message: e.to_string(),
    })?;

    pems.into_iter()
        .find(|p| p.tag() == "CERTIFICATE")
        .map(|p| p.into_contents())
        .ok_or_else(|| CertificateError::PemError {
            message: "No CERTIFICATE block found".to_string(),
        })
}

fn record_from_der(der: &[u8], today: NaiveDate) -> Result<CertificateRecord, CertificateError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| CertificateError::DerError {
        message: format!("{:?}", e),
    })?;

    let subject_name = first_attribute(cert.subject().iter_common_name());
    let organization_name = first_attribute(cert.subject().iter_organization());
    let serial_number = format!("{:X}", cert.serial);

    let valid_from = asn1_time_to_date(cert.validity().not_before, "notBefore")?;
    let valid_until = asn1_time_to_date(cert.validity().not_after, "notAfter")?;

    Ok(CertificateRecord::new(
        subject_name,
        organization_name,
        serial_number,
        valid_from,
        valid_until,
        today,
    ))
}

/// ASN.1 universal tag numbers of the string types `as_str` does not decode
const TAG_UNIVERSAL_STRING: u32 = 28;
const TAG_BMP_STRING: u32 = 30;

/// First readable value of an attribute, or the placeholder
fn first_attribute<'a, 'b>(mut attrs: impl Iterator<Item = &'a AttributeTypeAndValue<'b>>) -> String
where
    'b: 'a,
{
    attrs
        .next()
        .and_then(attribute_text)
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string())
}

/// Decode an attribute value, including the UCS-2 and UCS-4 string types
fn attribute_text(attr: &AttributeTypeAndValue<'_>) -> Option<String> {
    if let Ok(text) = attr.as_str() {
        return Some(text.to_string());
    }

    let value = attr.attr_value();
    match value.header.tag().0 {
        TAG_BMP_STRING => decode_bmp_string(value.data),
        TAG_UNIVERSAL_STRING => decode_universal_string(value.data),
        _ => None,
    }
}

/// BMPString: big-endian UTF-16 code units
fn decode_bmp_string(data: &[u8]) -> Option<String> {
    if data.len() % 2 != 0 {
        return None;
    }
    let units = data
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

/// UniversalString: big-endian UTF-32 code points
fn decode_universal_string(data: &[u8]) -> Option<String> {
    if data.len() % 4 != 0 {
        return None;
    }
    data.chunks_exact(4)
        .map(|quad| char::from_u32(u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]])))
        .collect()
}

/// Convert ASN.1 time to a UTC calendar date
fn asn1_time_to_date(time: ASN1Time, field: &'static str) -> Result<NaiveDate, CertificateError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .map(|dt| dt.date_naive())
        .ok_or(CertificateError::InvalidTime { field })
}
