//! Integration tests for the scrape and analyze pipeline
//!
//! These tests use wiremock to serve catalog pages and tempfile for the
//! CSV files, running both stages end-to-end.

mod scrape_tests;

use census_catalog::config::Config;
use std::path::Path;

/// Creates a test configuration pointing at `base_url` with files under `dir`
pub fn create_test_config(base_url: &str, pages: u32, dir: &Path) -> Config {
    let mut config = Config::default();
    config.catalog.base_url = base_url.to_string();
    config.catalog.pages = pages;
    config.catalog.timeout_secs = 5;
    config.catalog.delay_ms = 0;
    config.output.products_path = dir.join("census_products.csv").display().to_string();
    config.output.summary_path = dir.join("bundle_analysis.csv").display().to_string();
    config
}

/// Renders one product listing as it appears on a catalog page
pub fn listing(slug: &str, title: &str, description: &str, price: &str) -> String {
    format!(
        r#"<a href="https://www.genealogysupplies.com/product/{}/">
            <div class="row">
                <div class="col-md-10"><h1>{}</h1><p>{}</p></div>
                <div class="col-md-2"><h1>{}</h1></div>
            </div>
        </a>"#,
        slug, title, description, price
    )
}

/// Wraps listings in the catalog page layout
pub fn catalog_page(listings: &[String]) -> String {
    format!(
        r#"<html><head><title>Products</title></head><body>
        <div class="row">
            <div class="col-md-3"><a href="/products/?page=2">Next</a></div>
            <div class="col-md-9">{}</div>
        </div>
        </body></html>"#,
        listings.concat()
    )
}
