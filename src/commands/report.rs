//! Report command implementation
//!
//! This is the caller side of the pipeline: it reads files from disk,
//! enforces the per-file size cap, runs the pipeline and writes the
//! spreadsheet.

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;
use crate::models::{accepted_extensions, InputKind, NamedInput};
use crate::output::{
    print_batch_summary, print_error, print_json, print_report_table, print_success,
    print_summary, print_warning,
};
use crate::runner::{generate_report, CertificateReport};
use crate::utils::ReportError;
use anyhow::Context;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Why an input file was not handed to the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooLarge { size: u64, limit: u64 },
    Unsupported,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLarge { size, limit } => write!(
                f,
                "file is too large ({:.2} MB, limit {:.0} MB)",
                *size as f64 / 1024.0 / 1024.0,
                *limit as f64 / 1024.0 / 1024.0
            ),
            SkipReason::Unsupported => {
                write!(f, "unsupported file type (accepted: {})", accepted_extensions())
            }
        }
    }
}

/// Inputs read from disk plus the files that were left out
#[derive(Debug, Default)]
pub struct LoadedInputs {
    pub inputs: Vec<NamedInput>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Read the given files into memory, skipping oversized and unsupported ones
pub fn read_inputs(paths: &[PathBuf], max_file_size: u64) -> anyhow::Result<LoadedInputs> {
    let mut loaded = LoadedInputs::default();

    for path in paths {
        let file_name = display_name(path);

        if InputKind::from_name(&file_name) == InputKind::Unsupported {
            warn!(file = %file_name, "Unsupported file type");
            loaded.skipped.push((path.clone(), SkipReason::Unsupported));
            continue;
        }

        let size = std::fs::metadata(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .len();
        if size > max_file_size {
            warn!(file = %file_name, size, limit = max_file_size, "File too large");
            loaded.skipped.push((
                path.clone(),
                SkipReason::TooLarge {
                    size,
                    limit: max_file_size,
                },
            ));
            continue;
        }

        let content =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        debug!(file = %file_name, bytes = content.len(), "Loaded input");
        loaded.inputs.push(NamedInput::new(file_name, content));
    }

    Ok(loaded)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Write the spreadsheet to disk
pub fn write_spreadsheet(bytes: &[u8], path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, bytes).map_err(|e| ReportError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Run the report command. Returns `Ok(false)` when no certificate was found.
pub fn run_report(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    let options = settings.report_options(cli.threshold)?;
    let loaded = read_inputs(&cli.files, settings.input.max_file_size_bytes)?;

    for (path, reason) in &loaded.skipped {
        print_warning(&format!("Skipping {}: {}", path.display(), reason));
    }

    let report = generate_report(&loaded.inputs, &options)?;

    let bytes = match &report.spreadsheet {
        Some(bytes) => bytes,
        None => {
            print_error(
                "No certificates could be found or parsed in the given files. \
                 Make sure the file format is correct.",
            );
            return Ok(false);
        }
    };

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.report.file_name));
    write_spreadsheet(bytes, &output_path)?;

    print_report(&report, cli.format, &output_path)?;
    Ok(true)
}

fn print_report(
    report: &CertificateReport,
    format: OutputFormat,
    output_path: &Path,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(report, Some(output_path.display().to_string()))?,
        OutputFormat::Summary => println!("{}", report.summary),
        OutputFormat::Table => {
            print_summary(&report.summary, report.threshold);
            println!();
            print_report_table(&report.table());
            print_batch_summary(&report.counts, report.threshold);
            println!();
            print_success(&format!("Report written to {}", output_path.display()));
        }
    }
    Ok(())
}
