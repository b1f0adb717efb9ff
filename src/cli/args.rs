//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cert-report")]
#[command(version)]
#[command(about = "Summarize certificate expiry and build an xlsx report", long_about = None)]
pub struct Cli {
    /// Certificate files (.cer, .crt, .pem, .der) or zip bundles of them
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Days before expiry that count as "expiring soon" [default: from config, 30]
    #[arg(short, long, value_name = "DAYS", allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Write the spreadsheet to this file [default: from config]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default tracing filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary plus a terminal table (default)
    Table,
    /// JSON output
    Json,
    /// Summary text only
    Summary,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Summary => write!(f, "summary"),
        }
    }
}
