//! Site-specific modules for the HTTP client, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{CatalogClient, CatalogFetch};
pub use models::{CatalogColumns, CatalogRow, CatalogTable};
pub use parser::Parser;
