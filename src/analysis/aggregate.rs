//! Bundle aggregation: filter, group by county, fold to maximum price

use crate::config::AnalysisConfig;
use crate::output::ProductRecord;
use crate::AnalysisError;
use std::collections::BTreeMap;

/// Highest bundle price seen for one county
#[derive(Debug, Clone, PartialEq)]
pub struct CountyAggregate {
    pub county: String,
    pub max_bundle_price: f64,
}

/// Aggregated bundle prices, counties in ascending byte order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleSummary {
    pub counties: Vec<CountyAggregate>,
}

impl BundleSummary {
    pub fn total_counties(&self) -> usize {
        self.counties.len()
    }

    /// Sum of the per-county maxima
    pub fn sum_of_max(&self) -> f64 {
        self.counties.iter().map(|c| c.max_bundle_price).sum()
    }
}

/// True if `title` contains `keyword`, ignoring case
pub fn is_bundle(title: &str, keyword: &str) -> bool {
    title.to_lowercase().contains(&keyword.to_lowercase())
}

/// First whitespace-delimited token of a title
///
/// Returns `None` for a title that is empty or all whitespace.
pub fn county_of(title: &str) -> Option<&str> {
    title.split_whitespace().next()
}

/// Parses price text such as `£1,234.56`
///
/// Every occurrence of `currency_symbol` and every comma is removed and the
/// remainder, trimmed, is parsed as a decimal number.
pub fn parse_price(text: &str, currency_symbol: &str) -> Option<f64> {
    text.replace(currency_symbol, "")
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
}

/// Folds bundle rows into one maximum price per county
///
/// Rows whose title does not contain the keyword are ignored. A bundle row
/// with an empty title or an unparsable price aborts the whole aggregation.
/// `row` numbers in errors are 1-based data rows (header excluded).
pub fn aggregate(
    records: &[ProductRecord],
    config: &AnalysisConfig,
) -> Result<BundleSummary, AnalysisError> {
    let mut maxima: BTreeMap<String, f64> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        if !is_bundle(&record.title, &config.keyword) {
            continue;
        }

        let row = index + 1;
        let county = county_of(&record.title).ok_or(AnalysisError::EmptyTitle { row })?;
        let price = parse_price(&record.price, &config.currency_symbol).ok_or_else(|| {
            AnalysisError::InvalidPrice {
                row,
                title: record.title.clone(),
                price: record.price.clone(),
            }
        })?;

        match maxima.get_mut(county) {
            Some(current) => {
                if price > *current {
                    *current = price;
                }
            }
            None => {
                maxima.insert(county.to_string(), price);
            }
        }
    }

    let counties = maxima
        .into_iter()
        .map(|(county, max_bundle_price)| CountyAggregate {
            county,
            max_bundle_price,
        })
        .collect();

    Ok(BundleSummary { counties })
}
