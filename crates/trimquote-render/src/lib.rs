//! # Trimquote Render
//!
//! Turns a priced [`EstimateResult`] into downloadable quote documents.
//! Formatters never recompute prices: line items are printed in the order
//! and with the rounding the pricing engine produced.
//!
//! | Format     | Output                                           |
//! |------------|--------------------------------------------------|
//! | `Text`     | UTF-8, one line per field and line item          |
//! | `Table`    | CSV: metadata row, blank row, `Item,Cost` rows   |
//! | `Document` | Single-page PDF (paginates when content overflows) |

pub mod document;
pub mod sections;
pub mod table;
pub mod text;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use trimquote_common::{ClientInfo, EstimateResult, Letterhead, Result};

pub use sections::{QuoteSections, CLOSING_LINES};

/// Output format of a rendered quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteFormat {
    Text,
    Table,
    Document,
}

impl QuoteFormat {
    pub const ALL: [QuoteFormat; 3] = [QuoteFormat::Text, QuoteFormat::Table, QuoteFormat::Document];

    pub fn extension(&self) -> &'static str {
        match self {
            QuoteFormat::Text => "txt",
            QuoteFormat::Table => "csv",
            QuoteFormat::Document => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            QuoteFormat::Text => "text/plain; charset=utf-8",
            QuoteFormat::Table => "text/csv",
            QuoteFormat::Document => "application/pdf",
        }
    }
}

impl fmt::Display for QuoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A rendered quote ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: QuoteFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Renders quotes under one business letterhead
#[derive(Debug, Clone, Default)]
pub struct QuoteFormatter {
    letterhead: Letterhead,
}

impl QuoteFormatter {
    pub fn new(letterhead: Letterhead) -> Self {
        Self { letterhead }
    }

    pub fn letterhead(&self) -> &Letterhead {
        &self.letterhead
    }

    fn sections(&self, client: &ClientInfo, result: &EstimateResult) -> QuoteSections {
        QuoteSections::build(&self.letterhead, client, result)
    }

    /// Plain-text quote
    pub fn render_text(&self, client: &ClientInfo, result: &EstimateResult) -> String {
        text::render(&self.sections(client, result))
    }

    /// CSV quote
    pub fn render_table(&self, client: &ClientInfo, result: &EstimateResult) -> Result<Vec<u8>> {
        Ok(table::render(client, result)?)
    }

    /// PDF quote
    pub fn render_document(&self, client: &ClientInfo, result: &EstimateResult) -> Result<Vec<u8>> {
        Ok(document::render(&self.sections(client, result))?)
    }

    /// Render one format with its download file name
    pub fn render(
        &self,
        format: QuoteFormat,
        client: &ClientInfo,
        result: &EstimateResult,
    ) -> Result<Artifact> {
        let bytes = match format {
            QuoteFormat::Text => self.render_text(client, result).into_bytes(),
            QuoteFormat::Table => self.render_table(client, result)?,
            QuoteFormat::Document => self.render_document(client, result)?,
        };
        debug!(%format, size = bytes.len(), "Rendered quote");
        Ok(Artifact {
            format,
            file_name: format!("{}.{}", client.file_stem(), format.extension()),
            bytes,
        })
    }

    /// Render several formats; fails as a whole if any one fails
    pub fn render_all(
        &self,
        formats: &[QuoteFormat],
        client: &ClientInfo,
        result: &EstimateResult,
    ) -> Result<Vec<Artifact>> {
        formats
            .iter()
            .map(|format| self.render(*format, client, result))
            .collect()
    }
}

#[cfg(test)]
mod proptests;
