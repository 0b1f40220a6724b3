//! Configuration module for Census-Catalog
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every value has a built-in default, so running without a file is the norm.
//!
//! # Example
//!
//! ```no_run
//! use census_catalog::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("catalog.toml")).unwrap();
//! println!("Scraper will fetch {} pages", config.catalog.pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalysisConfig, CatalogConfig, Config, ExtractorConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
