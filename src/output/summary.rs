//! Bundle summary output: console table and summary CSV

use crate::analysis::BundleSummary;
use crate::CatalogError;
use std::fs::File;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Renders a price as currency text with two decimals, e.g. `£20.00`
pub fn format_price(value: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, value)
}

/// Formats the fixed-width console report
///
/// County names are padded to 30 columns and prices right-aligned in 14
/// columns after the currency symbol.
pub fn format_report(summary: &BundleSummary, currency_symbol: &str) -> String {
    let mut report = String::new();

    report.push_str("County Bundle Analysis\n");
    report.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    report.push_str(&format!("{:<30} {:>15}\n", "County", "Max Bundle Price"));
    report.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

    for county in &summary.counties {
        report.push_str(&format!(
            "{:<30} {}{:>14.2}\n",
            county.county, currency_symbol, county.max_bundle_price
        ));
    }

    report.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
    report.push_str(&format!(
        "{:<30} {:>15}\n",
        "Total Counties:",
        summary.total_counties()
    ));
    report.push_str(&format!(
        "{:<30} {}{:>14.2}\n",
        "Sum of Max Prices:",
        currency_symbol,
        summary.sum_of_max()
    ));

    report
}

/// Writes the summary CSV
///
/// Layout: header `county,max_bundle_price`, one row per county, a blank
/// row, then the `Total Counties` and `Sum of Max Prices` rows. Rows end
/// in `\r\n`.
pub fn write_summary(
    path: &Path,
    summary: &BundleSummary,
    currency_symbol: &str,
) -> Result<(), CatalogError> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    writer.write_record(["county", "max_bundle_price"])?;

    for county in &summary.counties {
        writer.write_record([
            county.county.as_str(),
            format_price(county.max_bundle_price, currency_symbol).as_str(),
        ])?;
    }

    writer.write_record(["", ""])?;
    writer.write_record(["Total Counties", summary.total_counties().to_string().as_str()])?;
    writer.write_record([
        "Sum of Max Prices",
        format_price(summary.sum_of_max(), currency_symbol).as_str(),
    ])?;

    writer.flush()?;
    Ok(())
}
