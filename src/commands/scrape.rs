//! Catalog scrape command implementation.

use crate::catalog::{CatalogClient, CatalogFetch, CatalogTable, Parser};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Fetches one catalog page and assembles the product table.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the scrape and returns formatted output.
    ///
    /// `Ok(None)` means the page could not be fetched; the diagnostic has
    /// already been logged and no table exists.
    pub async fn execute(&self, url: &str) -> Result<Option<String>> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, url).await
    }

    /// Runs the scrape with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl CatalogFetch,
        url: &str,
    ) -> Result<Option<String>> {
        let Some(table) = self.scrape_with_client(client, url).await? else {
            return Ok(None);
        };

        let formatter = Formatter::new(self.config.format);
        Ok(Some(formatter.format_table(&table)))
    }

    /// Fetches and parses without formatting, for library callers.
    pub async fn scrape_with_client(
        &self,
        client: &impl CatalogFetch,
        url: &str,
    ) -> Result<Option<CatalogTable>> {
        let Some(html) = client.page(url).await? else {
            return Ok(None);
        };

        let table = Parser::new().parse(&html);
        info!("Assembled {} catalog rows", table.count());

        Ok(Some(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use async_trait::async_trait;

    /// Mock catalog client for testing.
    struct MockCatalogClient {
        response: Option<String>,
        should_fail: bool,
    }

    impl MockCatalogClient {
        fn new(html: &str) -> Self {
            Self { response: Some(html.to_string()), should_fail: false }
        }

        fn not_found() -> Self {
            Self { response: None, should_fail: false }
        }

        fn failing() -> Self {
            Self { response: None, should_fail: true }
        }
    }

    #[async_trait]
    impl CatalogFetch for MockCatalogClient {
        async fn page(&self, _url: &str) -> Result<Option<String>> {
            if self.should_fail {
                anyhow::bail!("Simulated network error")
            }
            Ok(self.response.clone())
        }
    }

    fn make_catalog_html(entries: &[(&str, &str, &str)]) -> String {
        let mut html = String::from("<html><body>");
        for (name, category, dimensions) in entries {
            html.push_str(&format!(
                r#"<div class="product-slide-entry shift-image"><div class="product-image"><img src="/img/{name}.jpg"></div><a class="title" href="producto.php">{name}</a><a class="category">{category}</a><div class="cat-sec-box">Atrezzo&nbsp;&nbsp;{category}</div><div class="price">{dimensions} (cm)</div></div>"#,
            ));
        }
        html.push_str("</body></html>");
        html
    }

    #[tokio::test]
    async fn test_scrape_command_basic() {
        let html = make_catalog_html(&[
            ("Espada", "Armas", "120 x 15"),
            ("Candelabro", "Iluminación", "45 x 30"),
        ]);

        let client = MockCatalogClient::new(&html);
        let cmd = ScrapeCommand::new(Config::default());

        let output = cmd.execute_with_client(&client, "https://atrezzovazquez.es/shop.php").await;
        let output = output.unwrap().expect("fetch succeeded");

        assert!(output.contains("Espada"));
        assert!(output.contains("Candelabro"));
        assert!(output.contains("Total: 2 entries"));
    }

    #[tokio::test]
    async fn test_scrape_command_empty_page() {
        let client = MockCatalogClient::new("<html><body></body></html>");
        let cmd = ScrapeCommand::new(Config::default());

        let output = cmd.execute_with_client(&client, "https://atrezzovazquez.es/shop.php").await;
        // A page with no products is still a page; the table is just empty
        assert_eq!(output.unwrap(), Some("No catalog entries found.".to_string()));
    }

    #[tokio::test]
    async fn test_scrape_command_fetch_sentinel() {
        let client = MockCatalogClient::not_found();
        let cmd = ScrapeCommand::new(Config::default());

        let output = cmd.execute_with_client(&client, "https://atrezzovazquez.es/shop.php").await;
        // Non-200 produces no table at all
        assert!(output.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scrape_command_transport_error() {
        let client = MockCatalogClient::failing();
        let cmd = ScrapeCommand::new(Config::default());

        let result = cmd.execute_with_client(&client, "https://atrezzovazquez.es/shop.php").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("network error"));
    }

    #[tokio::test]
    async fn test_scrape_command_json_format() {
        let html = make_catalog_html(&[("Espada", "Armas", "120 x 15")]);

        let client = MockCatalogClient::new(&html);
        let mut config = Config::default();
        config.format = OutputFormat::Json;

        let cmd = ScrapeCommand::new(config);
        let output = cmd.execute_with_client(&client, "https://atrezzovazquez.es/shop.php").await;
        let output = output.unwrap().unwrap();

        assert!(output.starts_with('['));
        assert!(output.contains("\"name\": \"Espada\""));
    }

    #[tokio::test]
    async fn test_scrape_table_rows() {
        let html = make_catalog_html(&[
            ("Espada", "Armas", "120 x 15"),
            ("Baúl", "Mobiliario", "90 x 50"),
        ]);

        let client = MockCatalogClient::new(&html);
        let cmd = ScrapeCommand::new(Config::default());

        let table = cmd
            .scrape_with_client(&client, "https://atrezzovazquez.es/shop.php")
            .await
            .unwrap()
            .expect("fetch succeeded");

        assert_eq!(table.count(), 2);
        assert_eq!(table.rows[0].name, "Espada");
        assert_eq!(table.rows[0].category, "Armas");
        assert_eq!(table.rows[0].section, "Atrezzo Armas");
        assert_eq!(table.rows[0].dimensions, "120 x 15");
        assert_eq!(table.rows[1].image_url, "https://atrezzovazquez.es//img/Baúl.jpg");
    }
}
