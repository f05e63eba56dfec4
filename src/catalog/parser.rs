//! HTML parser and extractors for the catalog listing page.

use crate::catalog::models::{CatalogColumns, CatalogRow, CatalogTable};
use crate::catalog::selectors::{listing, SITE_BASE_URL};
use scraper::{ElementRef, Html};
use tracing::debug;

/// Parser for catalog pages.
///
/// Stateless: every method re-queries the document tree it is given.
pub struct Parser;

impl Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a catalog page into a row-oriented table.
    ///
    /// Walks the product cards once and derives every attribute from the
    /// card itself, so a card with a missing field cannot shift the values
    /// of its neighbours.
    pub fn parse(&self, html: &str) -> CatalogTable {
        let document = Html::parse_document(html);

        let rows: Vec<CatalogRow> =
            document.select(&listing::PRODUCT_CARD).map(|card| self.parse_card(card)).collect();

        debug!("parsed {} catalog rows", rows.len());

        CatalogTable::new(rows)
    }

    /// Extracts the six attribute lists, each in document order.
    ///
    /// Mirrors the listing column by column; the lists line up
    /// index-for-index only while every card carries every field.
    pub fn parse_columns(&self, html: &str) -> CatalogColumns {
        let document = Html::parse_document(html);

        CatalogColumns {
            names: self.names(&document),
            categories: self.categories(&document),
            sections: self.sections(&document),
            descriptions: self.descriptions(&document),
            dimensions: self.dimensions(&document),
            image_urls: self.image_urls(&document),
        }
    }

    /// Derives all six attributes from a single product card.
    fn parse_card(&self, card: ElementRef) -> CatalogRow {
        let name =
            card.select(&listing::TITLE).next().map(element_text).unwrap_or_default();

        let category = nth_child_element_text(card, 2);

        let section = card
            .select(&listing::SECTION_BOX)
            .next()
            .map(|e| normalize_section(&element_text(e)))
            .unwrap_or_default();

        let description = normalize_dimension(&element_text(card));

        let dimensions = card
            .select(&listing::PRICE)
            .next()
            .map(|e| normalize_dimension(&element_text(e)))
            .unwrap_or_default();

        let image_url =
            card.select(&listing::PRODUCT_IMAGE).next().map(image_url).unwrap_or_default();

        CatalogRow { name, category, section, description, dimensions, image_url }
    }

    /// Prop names: text of the `a.title` links.
    pub fn names(&self, document: &Html) -> Vec<String> {
        document.select(&listing::TITLE).map(element_text).collect()
    }

    /// Category labels: the text of the third direct child element of each
    /// product card. Positional access, so it tracks the current snapshot
    /// of the card markup.
    pub fn categories(&self, document: &Html) -> Vec<String> {
        document
            .select(&listing::PRODUCT_CARD)
            .map(|card| nth_child_element_text(card, 2))
            .collect()
    }

    /// Section labels, trimmed and with the non-breaking double space
    /// collapsed.
    pub fn sections(&self, document: &Html) -> Vec<String> {
        document
            .select(&listing::SECTION_BOX)
            .map(|e| normalize_section(&element_text(e)))
            .collect()
    }

    /// Full card text with newlines and the dimension marker stripped.
    pub fn descriptions(&self, document: &Html) -> Vec<String> {
        document
            .select(&listing::PRODUCT_CARD)
            .map(|card| normalize_dimension(&element_text(card)))
            .collect()
    }

    /// Dimension strings from the price slot of each card.
    pub fn dimensions(&self, document: &Html) -> Vec<String> {
        document
            .select(&listing::PRICE)
            .map(|e| normalize_dimension(&element_text(e)))
            .collect()
    }

    /// Absolute image URLs, built from each image container.
    pub fn image_urls(&self, document: &Html) -> Vec<String> {
        document.select(&listing::PRODUCT_IMAGE).map(image_url).collect()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenated text content of an element.
fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

/// Text of the nth direct child element (zero-based); empty when the card
/// has fewer children.
fn nth_child_element_text(element: ElementRef, n: usize) -> String {
    element.child_elements().nth(n).map(element_text).unwrap_or_default()
}

/// Builds an absolute image URL from the `src` of the container's first
/// child element. The site serves root-relative paths, so the join keeps
/// the double slash the site itself links. A container without a `src`
/// yields the bare base URL rather than dropping the entry.
fn image_url(container: ElementRef) -> String {
    let src = container
        .child_elements()
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default();

    format!("{}{}", SITE_BASE_URL, src)
}

/// Strips embedded newlines and the literal ` (cm)` unit marker.
pub fn normalize_dimension(raw: &str) -> String {
    raw.replace('\n', "").replace(" (cm)", "")
}

/// Trims the label and collapses the site's non-breaking double space to a
/// single normal space.
pub fn normalize_section(raw: &str) -> String {
    raw.trim().replace("\u{a0}\u{a0}", " ")
}
