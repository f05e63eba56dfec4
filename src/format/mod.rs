//! Output formatting for the catalog table (text table, JSON, markdown, CSV).

use crate::catalog::models::{CatalogRow, CatalogTable, COLUMN_LABELS};
use crate::config::OutputFormat;

/// Formats the assembled catalog table for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a catalog table.
    pub fn format_table(&self, table: &CatalogTable) -> String {
        if table.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No catalog entries found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json(table),
            OutputFormat::Table => self.text(table),
            OutputFormat::Markdown => self.markdown(table),
            OutputFormat::Csv => self.csv(table),
        }
    }

    // JSON formatting

    fn json(&self, table: &CatalogTable) -> String {
        serde_json::to_string_pretty(&table.rows).unwrap_or_else(|_| "[]".to_string())
    }

    // Text table formatting

    fn text(&self, table: &CatalogTable) -> String {
        let name_width = 28;
        let category_width = 16;
        let section_width = 20;
        let dimensions_width = 18;

        let mut lines = Vec::new();

        // Header; the description column is left off the text table, it
        // repeats the other columns' text
        lines.push(format!(
            "{:<name_width$}  {:<category_width$}  {:<section_width$}  {:<dimensions_width$}  {}",
            COLUMN_LABELS[0], COLUMN_LABELS[1], COLUMN_LABELS[2], COLUMN_LABELS[4], COLUMN_LABELS[5]
        ));
        lines.push(format!(
            "{:-<name_width$}  {:-<category_width$}  {:-<section_width$}  {:-<dimensions_width$}  {:-<20}",
            "", "", "", "", ""
        ));

        // Rows
        for row in &table.rows {
            lines.push(format!(
                "{:<name_width$}  {:<category_width$}  {:<section_width$}  {:<dimensions_width$}  {}",
                truncate(&row.name, name_width),
                truncate(&row.category, category_width),
                truncate(&row.section, section_width),
                truncate(&row.dimensions, dimensions_width),
                row.image_url
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} entries", table.count()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown(&self, table: &CatalogTable) -> String {
        let mut lines = Vec::new();

        lines.push(format!("| {} |", COLUMN_LABELS.join(" | ")));
        lines.push(format!("|{}", "------|".repeat(COLUMN_LABELS.len())));

        for row in &table.rows {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} |",
                row.name,
                row.category,
                row.section,
                truncate(&row.description, 60),
                row.dimensions,
                row.image_url
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} entries*", table.count()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        COLUMN_LABELS.join(",")
    }

    fn csv(&self, table: &CatalogTable) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for row in &table.rows {
            lines.push(self.csv_row(row));
        }

        lines.join("\n")
    }

    fn csv_row(&self, row: &CatalogRow) -> String {
        [
            &row.name,
            &row.category,
            &row.section,
            &row.description,
            &row.dimensions,
            &row.image_url,
        ]
        .map(|field| Self::csv_escape(field))
        .join(",")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Character-based truncation; the catalog text is Spanish, so byte
/// slicing could split an accented character.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
