//! Analysis module for the bundle price summary
//!
//! Reads the products CSV written by the scraper, keeps the bundle rows,
//! groups them by county and reports each county's highest price.

mod aggregate;

pub use aggregate::{
    aggregate, county_of, is_bundle, parse_price, BundleSummary, CountyAggregate,
};

use crate::config::Config;
use crate::output::{format_report, read_products, write_summary};
use crate::CatalogError;
use std::path::Path;

/// Runs a complete analysis
///
/// 1. Reads the products CSV
/// 2. Aggregates bundle prices per county
/// 3. Prints the console report
/// 4. Writes the summary CSV
///
/// Malformed bundle rows abort the run before the summary file is created.
pub fn analyze(config: &Config) -> Result<BundleSummary, CatalogError> {
    let input = Path::new(&config.output.products_path);
    let output = Path::new(&config.output.summary_path);
    let symbol = &config.analysis.currency_symbol;

    tracing::info!("Loading products from {}", input.display());
    let records = read_products(input)?;

    let summary = aggregate(&records, &config.analysis)?;
    tracing::info!(
        "{} products read, {} counties with bundles",
        records.len(),
        summary.total_counties()
    );

    print!("{}", format_report(&summary, symbol));

    write_summary(output, &summary, symbol)?;
    println!("\nResults saved to: {}", output.display());

    Ok(summary)
}
