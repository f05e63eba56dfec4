//! CSS selectors for the Atrezzo Vázquez catalog markup.
//!
//! Every selector used against the listing page lives in this file.
//! Update this file when the site changes its HTML structure.
//!
//! **Update process**: When extraction comes back empty, capture an HTML
//! sample, update selectors, and add a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Base URL prepended to image paths. The site serves root-relative `src`
/// attributes, so joining produces a double slash; that is the URL shape
/// the site itself links, so it is kept as-is.
pub const SITE_BASE_URL: &str = "https://atrezzovazquez.es/";

/// Selectors for the catalog listing page.
pub mod listing {
    use super::*;

    /// Product name link.
    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("a.title").unwrap());

    /// Product card container - one per catalog entry.
    pub static PRODUCT_CARD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.product-slide-entry.shift-image").unwrap());

    /// Category/section label box.
    pub static SECTION_BOX: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.cat-sec-box").unwrap());

    /// The price slot carries the item dimensions, not a price.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.price").unwrap());

    /// Image container; the `src` sits on its first child element.
    pub static PRODUCT_IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.product-image").unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        // Force evaluation of all lazy selectors to ensure they compile
        let _ = &*listing::TITLE;
        let _ = &*listing::PRODUCT_CARD;
        let _ = &*listing::SECTION_BOX;
        let _ = &*listing::PRICE;
        let _ = &*listing::PRODUCT_IMAGE;
    }

    #[test]
    fn test_basic_selector_matching() {
        let html = Html::parse_document(
            r#"<div class="product-slide-entry shift-image">
                <div class="product-image"><img src="/img/silla.jpg"></div>
                <a class="title" href="producto.php?id=7">Silla torneada</a>
            </div>"#,
        );

        let cards: Vec<_> = html.select(&listing::PRODUCT_CARD).collect();
        assert_eq!(cards.len(), 1);

        let titles: Vec<_> = html.select(&listing::TITLE).collect();
        assert_eq!(titles.len(), 1);
    }

    #[test]
    fn test_card_requires_both_classes() {
        let html = Html::parse_document(
            r#"<div class="product-slide-entry">plain slide</div>"#,
        );
        assert!(html.select(&listing::PRODUCT_CARD).next().is_none());
    }
}
