//! Scrape module for catalog page fetching and product extraction
//!
//! This module contains the first pipeline stage:
//! - HTTP fetching of numbered catalog pages
//! - HTML parsing and product extraction
//! - Sequential page collection and CSV persistence

mod collector;
mod extractor;
mod fetcher;

pub use collector::{scrape, CollectReport, Collector, PageOutcome, PageStatus};
pub use extractor::{parse_products, CatalogExtractor, ProductExtractor};
pub use fetcher::{build_http_client, fetch_page, page_url, FetchResult};
