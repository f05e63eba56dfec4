//! Data models for catalog rows and the assembled table.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Column labels in table order. These are the catalog's own domain labels
/// and are used verbatim in every output format.
pub const COLUMN_LABELS: [&str; 6] =
    ["Nombre", "Categoría", "Sección", "Descripción", "Dimensiones", "URL Imágenes"];

/// One catalog entry: a single prop listing with its six attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Prop name
    pub name: String,
    /// Category label from the card
    pub category: String,
    /// Section label, whitespace-normalized
    pub section: String,
    /// Full card text with the dimension marker stripped
    pub description: String,
    /// Free-text dimensions, unit marker stripped
    pub dimensions: String,
    /// Absolute image URL
    pub image_url: String,
}

/// The six attribute lists as extracted, before row assembly.
///
/// Each list is in document order. They correspond index-for-index only
/// while every product card carries every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogColumns {
    pub names: Vec<String>,
    pub categories: Vec<String>,
    pub sections: Vec<String>,
    pub descriptions: Vec<String>,
    pub dimensions: Vec<String>,
    pub image_urls: Vec<String>,
}

impl CatalogColumns {
    /// Length of the shortest column.
    pub fn min_len(&self) -> usize {
        [
            self.names.len(),
            self.categories.len(),
            self.sections.len(),
            self.descriptions.len(),
            self.dimensions.len(),
            self.image_urls.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    /// True when all six columns have the same length.
    pub fn is_aligned(&self) -> bool {
        let n = self.names.len();
        self.categories.len() == n
            && self.sections.len() == n
            && self.descriptions.len() == n
            && self.dimensions.len() == n
            && self.image_urls.len() == n
    }
}

/// Row-oriented catalog table, the pipeline's final output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTable {
    pub rows: Vec<CatalogRow>,
}

impl CatalogTable {
    /// Creates a table from already-assembled rows.
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    /// Zips the six columns into rows positionally.
    ///
    /// Columns of unequal length truncate to the shortest; a mismatch means
    /// the selectors disagreed about the page structure, so it is logged.
    pub fn from_columns(columns: CatalogColumns) -> Self {
        if !columns.is_aligned() {
            warn!(
                names = columns.names.len(),
                categories = columns.categories.len(),
                sections = columns.sections.len(),
                descriptions = columns.descriptions.len(),
                dimensions = columns.dimensions.len(),
                image_urls = columns.image_urls.len(),
                "column lengths differ; truncating to shortest"
            );
        }

        let CatalogColumns { names, categories, sections, descriptions, dimensions, image_urls } =
            columns;

        let rows = names
            .into_iter()
            .zip(categories)
            .zip(sections)
            .zip(descriptions)
            .zip(dimensions)
            .zip(image_urls)
            .map(|(((((name, category), section), description), dimensions), image_url)| {
                CatalogRow { name, category, section, description, dimensions, image_url }
            })
            .collect();

        Self { rows }
    }

    /// Returns the number of rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
