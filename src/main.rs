//! cert-report - certificate expiry reporting tool
//!
//! Reads certificate files and zip bundles, prints which certificates are
//! about to expire and writes a color-coded xlsx report.

use cert_report::cli::Cli;
use cert_report::commands;
use cert_report::config;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let settings = config::load_settings(cli.config.as_deref())?;
    commands::run_report(cli, &settings)
}
