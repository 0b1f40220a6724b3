//! Output module for the pipeline's files and reports
//!
//! This module handles:
//! - Reading and writing the products CSV shared by both stages
//! - Rendering the bundle summary as a console table and a summary CSV

mod records;
mod summary;

pub use records::{read_products, write_products, ProductRecord};
pub use summary::{format_price, format_report, write_summary};
