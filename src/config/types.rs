use serde::Deserialize;

/// Main configuration structure for Census-Catalog
///
/// Every section is optional in the TOML file; missing sections and fields
/// fall back to the values in the `Default` impls below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote catalog and fetch behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Site root; pages live under `{base-url}/products/?page=n`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Last page index to fetch (pages are 1-based)
    pub pages: u32,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Pause after each successfully fetched page (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://britishdataarchive.com".to_string(),
            pages: 22,
            timeout_secs: 30,
            delay_ms: 1000,
        }
    }
}

/// CSS selectors describing the catalog page layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Main content column holding all product anchors
    pub container: String,

    /// Anchors linking to a product detail page
    #[serde(rename = "product-link")]
    pub product_link: String,

    /// Column inside an anchor carrying title and description
    #[serde(rename = "content-column")]
    pub content_column: String,

    /// Column inside an anchor carrying the price
    #[serde(rename = "price-column")]
    pub price_column: String,

    pub heading: String,

    pub paragraph: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            container: "div.col-md-9".to_string(),
            product_link: r#"a[href*="genealogysupplies.com/product/"]"#.to_string(),
            content_column: "div.col-md-10".to_string(),
            price_column: "div.col-md-2".to_string(),
            heading: "h1".to_string(),
            paragraph: "p".to_string(),
        }
    }
}

/// Bundle aggregation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Case-insensitive substring marking a bundle title
    pub keyword: String,

    /// Currency symbol stripped from prices and prefixed on output
    #[serde(rename = "currency-symbol")]
    pub currency_symbol: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyword: "bundle".to_string(),
            currency_symbol: "£".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV written by the scraper and read by the analyzer
    #[serde(rename = "products-path")]
    pub products_path: String,

    /// CSV written by the analyzer
    #[serde(rename = "summary-path")]
    pub summary_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            products_path: "census_products.csv".to_string(),
            summary_path: "bundle_analysis.csv".to_string(),
        }
    }
}
