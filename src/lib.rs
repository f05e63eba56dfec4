//! atrezzo-scraper - Catalog scraper for the Atrezzo Vázquez prop inventory
//!
//! Fetches one catalog page, extracts the product attributes from the
//! listing markup, and assembles them into a row-oriented table.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;

pub use catalog::models::{CatalogColumns, CatalogRow, CatalogTable};
pub use config::Config;
