//! Census-Catalog: a product catalog scraper and bundle analyzer
//!
//! This crate fetches the paginated product catalog, extracts product
//! records from each page, persists them as CSV and later aggregates the
//! bundle listings by county.

pub mod analysis;
pub mod config;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for Census-Catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Malformed rows met while aggregating bundles
///
/// These abort the analysis run; no summary file is written.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Row {row}: bundle title is empty, cannot derive a county")]
    EmptyTitle { row: usize },

    #[error("Row {row}: cannot parse price '{price}' of '{title}'")]
    InvalidPrice {
        row: usize,
        title: String,
        price: String,
    },
}

/// Result type alias for Census-Catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analysis::{BundleSummary, CountyAggregate};
pub use config::Config;
pub use output::ProductRecord;
pub use scrape::{CatalogExtractor, Collector, ProductExtractor};
