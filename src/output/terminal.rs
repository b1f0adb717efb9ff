//! Rich terminal output formatting

use crate::models::{BucketCounts, ExpiryThreshold};
use console::style;

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print the summary text
pub fn print_summary(summary: &str, threshold: ExpiryThreshold) {
    print_header(&format!("Expiring within {}", threshold));
    for line in summary.lines() {
        println!("  {}", line);
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Print batch totals
pub fn print_batch_summary(counts: &BucketCounts, threshold: ExpiryThreshold) {
    print_header("Batch Summary");

    println!("  Certificates found: {}", style(counts.total).bold());
    println!("  Valid: {}", style(counts.valid).green());
    println!(
        "  Expiring soon (≤{}): {}",
        threshold,
        style(counts.expiring_soon).yellow()
    );
    println!("  Already expired: {}", style(counts.expired).red());
}
