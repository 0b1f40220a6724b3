//! Product extraction from catalog pages
//!
//! A catalog page keeps its listings inside one content column. Each listing
//! is an anchor pointing at the product detail site, with a content column
//! (title heading, description paragraph) and a price column (price heading).
//!
//! Missing structure is never an error: a page without the container yields
//! no products, a listing without a title is skipped, and missing
//! description or price become empty strings.

use crate::config::ExtractorConfig;
use crate::output::ProductRecord;
use crate::CatalogError;
use scraper::{ElementRef, Html, Selector};

/// Turns a parsed catalog page into product records
pub trait ProductExtractor {
    /// Returns the products on the page in document order
    fn extract(&self, document: &Html) -> Vec<ProductRecord>;
}

/// Selector-driven extractor for the catalog page layout
#[derive(Debug, Clone)]
pub struct CatalogExtractor {
    container: Selector,
    product_link: Selector,
    content_column: Selector,
    price_column: Selector,
    heading: Selector,
    paragraph: Selector,
}

impl CatalogExtractor {
    /// Compiles the configured selectors
    ///
    /// # Returns
    ///
    /// * `Ok(CatalogExtractor)` - All selectors compiled
    /// * `Err(CatalogError::Selector)` - A selector is not valid CSS
    pub fn new(config: &ExtractorConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            container: compile(&config.container)?,
            product_link: compile(&config.product_link)?,
            content_column: compile(&config.content_column)?,
            price_column: compile(&config.price_column)?,
            heading: compile(&config.heading)?,
            paragraph: compile(&config.paragraph)?,
        })
    }

    fn extract_listing(&self, link: ElementRef<'_>) -> Option<ProductRecord> {
        let content = link.select(&self.content_column).next();

        let title = content
            .and_then(|column| first_text(column, &self.heading))
            .filter(|title| !title.is_empty())?;

        let description = content
            .and_then(|column| first_text(column, &self.paragraph))
            .unwrap_or_default();

        let price = link
            .select(&self.price_column)
            .next()
            .and_then(|column| first_text(column, &self.heading))
            .unwrap_or_default();

        Some(ProductRecord {
            title,
            description,
            price,
        })
    }
}

impl ProductExtractor for CatalogExtractor {
    fn extract(&self, document: &Html) -> Vec<ProductRecord> {
        let Some(container) = document.select(&self.container).next() else {
            tracing::debug!("Products container not found");
            return Vec::new();
        };

        container
            .select(&self.product_link)
            .filter_map(|link| self.extract_listing(link))
            .collect()
    }
}

/// Parses page markup and runs the extractor over it
///
/// # Example
///
/// ```
/// use census_catalog::config::ExtractorConfig;
/// use census_catalog::scrape::{parse_products, CatalogExtractor};
///
/// let extractor = CatalogExtractor::new(&ExtractorConfig::default()).unwrap();
/// let products = parse_products("<html><body></body></html>", &extractor);
/// assert!(products.is_empty());
/// ```
pub fn parse_products(html: &str, extractor: &dyn ProductExtractor) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    extractor.extract(&document)
}

fn compile(selector: &str) -> Result<Selector, CatalogError> {
    Selector::parse(selector).map_err(|e| CatalogError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Text of the first descendant matching `selector`
///
/// Each text node is trimmed on its own and the pieces are joined with no
/// separator, so `<h1>Kent <small>Bundle</small></h1>` reads `KentBundle`.
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|element| element.text().map(str::trim).collect::<String>())
}
