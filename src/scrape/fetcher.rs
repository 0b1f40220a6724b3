//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the configured timeout
//! - Building catalog page URLs
//! - GET requests for one catalog page
//!
//! Transport errors, timeouts and error statuses all collapse into
//! [`FetchResult::Failed`]; the caller skips the page and moves on.

use crate::config::CatalogConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// The requested page URL
        url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Page could not be fetched (network error, timeout or error status)
    Failed {
        /// The requested page URL
        url: String,
        /// Error description
        error: String,
    },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }
}

/// Builds an HTTP client with the configured request timeout
///
/// # Example
///
/// ```no_run
/// use census_catalog::config::CatalogConfig;
/// use census_catalog::scrape::build_http_client;
///
/// let client = build_http_client(&CatalogConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CatalogConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the URL of one catalog page: `{base}/products/?page={page}`
///
/// Any path on the base URL is kept. Returns `None` if the base URL cannot
/// be parsed.
pub fn page_url(base_url: &str, page: u32) -> Option<Url> {
    let mut base = Url::parse(base_url).ok()?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let mut url = base.join("products/").ok()?;
    url.query_pairs_mut()
        .clear()
        .append_pair("page", &page.to_string());
    Some(url)
}

/// Fetches one catalog page
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - The catalog site root
/// * `page` - 1-based page index
///
/// # Returns
///
/// A FetchResult holding either the body text or the failure description
pub async fn fetch_page(client: &Client, base_url: &str, page: u32) -> FetchResult {
    let url = match page_url(base_url, page) {
        Some(url) => url,
        None => {
            return FetchResult::Failed {
                url: base_url.to_string(),
                error: format!("Invalid base URL: {}", base_url),
            }
        }
    };

    tracing::info!("Scraping page {}...", page);

    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status());

    let result = match response {
        Ok(response) => {
            let status_code = response.status().as_u16();
            match response.text().await {
                Ok(body) => FetchResult::Success {
                    url: url.to_string(),
                    status_code,
                    body,
                },
                Err(e) => FetchResult::Failed {
                    url: url.to_string(),
                    error: e.to_string(),
                },
            }
        }
        Err(e) => FetchResult::Failed {
            url: url.to_string(),
            error: e.to_string(),
        },
    };

    if let FetchResult::Failed { error, .. } = &result {
        tracing::warn!("Error fetching page {}: {}", page, error);
    }

    result
}
