//! Collector - drives the fetcher and extractor across the catalog
//!
//! Pages `1..=pages` are fetched one at a time. A fetched page is run through
//! the extractor and its products appended in order; a failed page is logged
//! and skipped without retry, as is a page whose response body is empty.
//! After every successful fetch the collector sleeps for the configured
//! delay before moving to the next page; skipped pages are not followed by
//! a delay.

use crate::config::Config;
use crate::output::{write_products, ProductRecord};
use crate::scrape::extractor::{parse_products, CatalogExtractor, ProductExtractor};
use crate::scrape::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::CatalogError;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// What happened to one catalog page
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    /// Page fetched; this many products were extracted
    Fetched { products: usize },

    /// Fetch failed or returned an empty body; page skipped
    Skipped { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome {
    pub page: u32,
    pub status: PageStatus,
}

/// Outcome of a full collection run
#[derive(Debug, Clone, Default)]
pub struct CollectReport {
    /// All products in page order, then document order
    pub products: Vec<ProductRecord>,

    /// One entry per attempted page
    pub pages: Vec<PageOutcome>,
}

impl CollectReport {
    pub fn pages_fetched(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p.status, PageStatus::Fetched { .. }))
            .count()
    }

    pub fn pages_skipped(&self) -> usize {
        self.pages.len() - self.pages_fetched()
    }
}

/// Sequential page collector
pub struct Collector {
    config: Config,
    client: Client,
    extractor: Box<dyn ProductExtractor>,
}

impl Collector {
    /// Creates a collector with the catalog extractor built from `config`
    ///
    /// # Returns
    ///
    /// * `Ok(Collector)` - Client and extractor ready
    /// * `Err(CatalogError)` - Client could not be built or a selector is invalid
    pub fn new(config: Config) -> Result<Self, CatalogError> {
        let client = build_http_client(&config.catalog)?;
        let extractor = CatalogExtractor::new(&config.extractor)?;
        Ok(Self::with_extractor(config, client, Box::new(extractor)))
    }

    /// Creates a collector with a caller-supplied client and extractor
    pub fn with_extractor(
        config: Config,
        client: Client,
        extractor: Box<dyn ProductExtractor>,
    ) -> Self {
        Self {
            config,
            client,
            extractor,
        }
    }

    /// Fetches every page in order and accumulates the extracted products
    pub async fn collect(&self) -> CollectReport {
        let catalog = &self.config.catalog;
        let delay = Duration::from_millis(catalog.delay_ms);
        let mut report = CollectReport::default();

        for page in 1..=catalog.pages {
            let status = match fetch_page(&self.client, &catalog.base_url, page).await {
                FetchResult::Success { url, body, .. } if body.is_empty() => {
                    tracing::warn!("Skipping page {}: empty response from {}", page, url);
                    PageStatus::Skipped {
                        error: "empty response body".to_string(),
                    }
                }
                FetchResult::Success {
                    url,
                    status_code,
                    body,
                } => {
                    tracing::debug!("Fetched {} ({}, {} bytes)", url, status_code, body.len());

                    let products = parse_products(&body, self.extractor.as_ref());
                    tracing::info!("Found {} products on page {}", products.len(), page);

                    let count = products.len();
                    report.products.extend(products);

                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }

                    PageStatus::Fetched { products: count }
                }
                FetchResult::Failed { error, .. } => {
                    tracing::warn!("Skipping page {} due to error", page);
                    PageStatus::Skipped { error }
                }
            };

            report.pages.push(PageOutcome { page, status });
        }

        report
    }
}

/// Runs a complete scrape and persists the products
///
/// Writes the products CSV only when at least one product was found;
/// otherwise nothing is written and "No products found" is reported.
pub async fn scrape(config: Config) -> Result<CollectReport, CatalogError> {
    let products_path = config.output.products_path.clone();

    tracing::info!(
        "Scraping {} pages from {}",
        config.catalog.pages,
        config.catalog.base_url
    );

    let collector = Collector::new(config)?;
    let report = collector.collect().await;

    if report.pages_skipped() > 0 {
        tracing::warn!("{} pages skipped", report.pages_skipped());
    }

    if report.products.is_empty() {
        println!("No products found");
        return Ok(report);
    }

    write_products(Path::new(&products_path), &report.products)?;

    println!("\nScraping complete!");
    println!("Total products found: {}", report.products.len());
    println!("Data saved to: {}", products_path);

    Ok(report)
}
