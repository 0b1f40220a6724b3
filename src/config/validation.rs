use crate::config::types::{AnalysisConfig, CatalogConfig, Config, ExtractorConfig, OutputConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_catalog_config(&config.catalog)?;
    validate_extractor_config(&config.extractor)?;
    validate_analysis_config(&config.analysis)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates catalog configuration
fn validate_catalog_config(config: &CatalogConfig) -> Result<(), ConfigError> {
    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be >= 1, got {}",
            config.pages
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    Ok(())
}

/// Validates that every selector compiles
fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    for (name, selector) in [
        ("container", &config.container),
        ("product_link", &config.product_link),
        ("content_column", &config.content_column),
        ("price_column", &config.price_column),
        ("heading", &config.heading),
        ("paragraph", &config.paragraph),
    ] {
        if Selector::parse(selector).is_err() {
            return Err(ConfigError::InvalidSelector(format!(
                "{} selector '{}' is not valid CSS",
                name, selector
            )));
        }
    }

    Ok(())
}

fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.keyword.trim().is_empty() {
        return Err(ConfigError::Validation("keyword cannot be empty".to_string()));
    }

    if config.currency_symbol.is_empty() {
        return Err(ConfigError::Validation(
            "currency_symbol cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.products_path.is_empty() {
        return Err(ConfigError::Validation(
            "products_path cannot be empty".to_string(),
        ));
    }

    if config.summary_path.is_empty() {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty".to_string(),
        ));
    }

    if config.products_path == config.summary_path {
        return Err(ConfigError::Validation(format!(
            "products_path and summary_path must differ, both are '{}'",
            config.products_path
        )));
    }

    Ok(())
}
