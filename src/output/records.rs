//! Product records and their CSV file format
//!
//! The file carries the header `title,description,price` and one row per
//! product, with standard CSV quoting for fields containing delimiters,
//! quotes or newlines. Rows end in `\r\n`.

use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,

    /// Empty if the listing had no description
    #[serde(default)]
    pub description: String,

    /// Price text as shown on the page, e.g. `£1,234.56`; empty if absent
    #[serde(default)]
    pub price: String,
}

impl ProductRecord {
    pub fn new(title: &str, description: &str, price: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }
}

/// Writes products to a CSV file, replacing any existing file
pub fn write_products(path: &Path, products: &[ProductRecord]) -> Result<(), CatalogError> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    for product in products {
        writer.serialize(product)?;
    }

    writer.flush()?;
    tracing::debug!("Wrote {} products to {}", products.len(), path.display());
    Ok(())
}

/// Reads products from a CSV file written by [`write_products`]
pub fn read_products(path: &Path) -> Result<Vec<ProductRecord>, CatalogError> {
    let mut reader = csv::Reader::from_path(path)?;
    let products = reader
        .deserialize()
        .collect::<Result<Vec<ProductRecord>, csv::Error>>()?;

    tracing::debug!("Read {} products from {}", products.len(), path.display());
    Ok(products)
}
