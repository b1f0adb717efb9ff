//! Batch collection of certificate records
//!
//! Expands zip bundles, routes single certificate files to the reader and
//! concatenates the results. Nothing here returns an error: a corrupt archive
//! or an unreadable entry just contributes fewer records.

use crate::cert_ops::reader::{self, extract_record_on};
use crate::models::{is_certificate_name, CertificateRecord, InputKind, NamedInput};
use crate::utils::ArchiveError;
use chrono::{Local, NaiveDate};
use std::io::{Cursor, Read};
use tracing::{debug, warn};
use zip::ZipArchive;

/// Largest decompressed size accepted for a single archive entry (20 MiB)
pub const MAX_ENTRY_SIZE: u64 = 20 * 1024 * 1024;

/// Collect records from every input using the local date as "today"
pub fn collect_batch(inputs: &[NamedInput]) -> Vec<CertificateRecord> {
    collect_batch_on(inputs, Local::now().date_naive())
}

/// Collect records from every input, preserving each input's internal order
pub fn collect_batch_on(inputs: &[NamedInput], today: NaiveDate) -> Vec<CertificateRecord> {
    inputs
        .iter()
        .flat_map(|input| collect_records_on(input, today))
        .collect()
}

/// Collect the records contained in a single named input
pub fn collect_records_on(input: &NamedInput, today: NaiveDate) -> Vec<CertificateRecord> {
    match input.kind() {
        InputKind::Archive => match read_archive(
            &input.file_name,
            &input.content,
            today,
            MAX_ENTRY_SIZE,
        ) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Corrupt archive, no certificates taken from it");
                Vec::new()
            }
        },
        InputKind::Certificate => {
            log_detected_format(&input.file_name, &input.content);
            extract_record_on(&input.content, today).into_iter().collect()
        }
        InputKind::Unsupported => {
            debug!(file = %input.file_name, "Ignoring unsupported file");
            Vec::new()
        }
    }
}

/// Open a zip bundle and extract every certificate-named entry in archive order
fn read_archive(
    name: &str,
    data: &[u8],
    today: NaiveDate,
    entry_limit: u64,
) -> Result<Vec<CertificateRecord>, ArchiveError> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|e| ArchiveError::OpenFailed {
            name: name.to_string(),
            message: e.to_string(),
        })?;

    let mut records = Vec::new();

    for index in 0..archive.len() {
        let (entry_name, content) = match read_entry(&mut archive, name, index, entry_limit) {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable archive entry");
                continue;
            }
        };

        match extract_record_on(&content, today) {
            Some(record) => records.push(record),
            None => debug!(archive = %name, entry = %entry_name, "Entry is not a certificate"),
        }
    }

    debug!(archive = %name, found = records.len(), "Archive processed");
    Ok(records)
}

/// Read one entry if it looks like a certificate file.
///
/// Returns `Ok(None)` for directories and entries with other suffixes.
/// Decompression stops after `limit` bytes; larger entries are an error.
fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
    index: usize,
    limit: u64,
) -> Result<Option<(String, Vec<u8>)>, ArchiveError> {
    let mut entry = archive
        .by_index(index)
        .map_err(|e| ArchiveError::EntryReadFailed {
            name: name.to_string(),
            entry: format!("#{}", index),
            message: e.to_string(),
        })?;

    let entry_name = entry.name().to_string();
    if entry.is_dir() || !is_certificate_name(&entry_name) {
        return Ok(None);
    }

    let too_large = || ArchiveError::EntryTooLarge {
        name: name.to_string(),
        entry: entry_name.clone(),
        limit,
    };
    if entry.size() > limit {
        return Err(too_large());
    }

    // declared size is untrusted; cap the bytes actually read
    let mut content = Vec::new();
    (&mut entry)
        .take(limit.saturating_add(1))
        .read_to_end(&mut content)
        .map_err(|e| ArchiveError::EntryReadFailed {
            name: name.to_string(),
            entry: entry_name.clone(),
            message: e.to_string(),
        })?;
    if content.len() as u64 > limit {
        return Err(too_large());
    }

    log_detected_format(&entry_name, &content);
    Ok(Some((entry_name, content)))
}

fn log_detected_format(name: &str, data: &[u8]) {
    match reader::detect_format_from_bytes(data) {
        Ok(format) => debug!(file = %name, %format, "Detected certificate encoding"),
        Err(e) => debug!(file = %name, error = %e, "Could not detect certificate encoding"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_corrupt_archive_yields_nothing() {
        let input = NamedInput::new("bundle.zip", b"PK\x03\x04 definitely not a zip".to_vec());
        assert!(collect_records_on(&input, today()).is_empty());
    }

    #[test]
    fn test_unsupported_name_yields_nothing() {
        let input = NamedInput::new("notes.txt", b"-----BEGIN CERTIFICATE-----".to_vec());
        assert!(collect_records_on(&input, today()).is_empty());
    }

    #[test]
    fn test_empty_batch() {
        assert!(collect_batch_on(&[], today()).is_empty());
        assert!(collect_batch(&[]).is_empty());
    }

    fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (entry, content) in entries {
            writer.start_file(*entry, SimpleFileOptions::default()).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_entry_over_limit_is_rejected() {
        let big = vec![b'A'; 4096];
        let data = zip_with(&[("huge.pem", big.as_slice())]);
        let mut archive = ZipArchive::new(Cursor::new(data.as_slice())).unwrap();

        let result = read_entry(&mut archive, "bundle.zip", 0, 1024);
        assert!(matches!(
            result,
            Err(ArchiveError::EntryTooLarge { limit: 1024, .. })
        ));
    }

    #[test]
    fn test_entry_at_limit_is_read() {
        let exact = vec![b'A'; 1024];
        let data = zip_with(&[("exact.pem", exact.as_slice())]);
        let mut archive = ZipArchive::new(Cursor::new(data.as_slice())).unwrap();

        let (entry_name, content) = read_entry(&mut archive, "bundle.zip", 0, 1024)
            .unwrap()
            .unwrap();
        assert_eq!(entry_name, "exact.pem");
        assert_eq!(content.len(), 1024);
    }

    #[test]
    fn test_oversized_entry_is_skipped_but_archive_continues() {
        let key = rcgen::KeyPair::generate().unwrap();
        let cert = rcgen::CertificateParams::new(vec!["small.example".to_string()])
            .unwrap()
            .self_signed(&key)
            .unwrap();
        let big = vec![b'A'; 4096];
        let data = zip_with(&[("huge.pem", big.as_slice()), ("small.der", &cert.der()[..])]);

        let records = read_archive("bundle.zip", &data, today(), 1024).unwrap();
        assert_eq!(records.len(), 1);
    }
}
