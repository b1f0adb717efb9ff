//! Table rendering using comfy-table

use crate::models::ExpiryBucket;
use crate::report::ReportTable;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

fn bucket_color(bucket: ExpiryBucket) -> Color {
    match bucket {
        ExpiryBucket::Expired => Color::Red,
        ExpiryBucket::ExpiringSoon => Color::Yellow,
        ExpiryBucket::Valid => Color::Green,
    }
}

fn build_table(report: &ReportTable, width: u16) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_width(width);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = report
        .headers()
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in &report.rows {
        let color = bucket_color(row.bucket);
        let cells: Vec<Cell> = row.cells.iter().map(|text| Cell::new(text).fg(color)).collect();
        table.add_row(cells);
    }

    table
}

/// Format the report table to an indented string
pub fn format_report_table(report: &ReportTable) -> String {
    // Constrain table width to terminal width minus indent, default to 120 if detection fails
    let width = crossterm::terminal::size()
        .map(|(cols, _)| cols)
        .unwrap_or(120)
        .saturating_sub(4);
    indent(&build_table(report, width))
}

fn indent(table: &Table) -> String {
    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

/// Print the report table
pub fn print_report_table(report: &ReportTable) {
    print!("{}", format_report_table(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CertificateRecord, ExpiryThreshold};
    use chrono::NaiveDate;

    #[test]
    fn test_format_contains_headers_and_values() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let record = CertificateRecord::new(
            "alice",
            "Example Org",
            "1ABCD",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
            today,
        );
        let table = ReportTable::build(&[record], ExpiryThreshold::default());

        let mut rendered = build_table(&table, 200);
        rendered.force_no_tty();
        let out = indent(&rendered);
        assert!(out.contains("Serial number"));
        assert!(out.contains("1ABCD"));
        assert!(out.contains("11.01.2025"));
        assert!(out.lines().all(|l| l.starts_with("    ")));
    }
}
