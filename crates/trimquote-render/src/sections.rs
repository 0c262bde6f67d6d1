//! Quote content shared by the text and PDF renderers

use trimquote_common::{ClientInfo, EstimateResult, Letterhead};

/// Closing statement, English then Spanish
pub const CLOSING_LINES: [&str; 2] = [
    "Thank you for choosing us for your painting project!",
    "¡Gracias por elegirnos para su proyecto de pintura!",
];

/// Date format used on every artifact
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Flatten user-entered text to one line: control characters become spaces
pub fn single_line(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

/// A quote broken into the blocks every document layout shares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSections {
    pub letterhead: Vec<String>,
    pub title: String,
    pub client: Vec<String>,
    pub parameters: Vec<String>,
    /// Priced items and fee, without the total
    pub items: Vec<String>,
    pub total: String,
    pub closing: Vec<String>,
}

impl QuoteSections {
    pub fn build(letterhead: &Letterhead, client: &ClientInfo, result: &EstimateResult) -> Self {
        let items = result
            .items
            .iter()
            .chain(result.materials_fee.iter())
            .map(|item| item.display_line())
            .collect();

        Self {
            letterhead: letterhead.lines(),
            title: result.kind.title().to_string(),
            client: vec![
                format!("Client: {}", single_line(&client.client_name)),
                format!("Project: {}", single_line(&client.project)),
                format!("Date: {}", client.date.format(DATE_FORMAT)),
            ],
            parameters: result
                .parameters
                .iter()
                .map(|p| format!("{}: {}", p.label, p.value))
                .collect(),
            items,
            total: result.total.display_line(),
            closing: CLOSING_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
