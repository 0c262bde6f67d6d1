//! Quote metadata: who the quote is for and who it is from

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client details printed on a quote. Never affects pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub client_name: String,
    /// Project name or address
    pub project: String,
    pub date: NaiveDate,
}

impl ClientInfo {
    pub fn new(client_name: impl Into<String>, project: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            client_name: client_name.into(),
            project: project.into(),
            date,
        }
    }

    /// Filesystem-safe stem: `quote_jane-doe_2024-05-01`
    pub fn file_stem(&self) -> String {
        let mut slug = String::with_capacity(self.client_name.len());
        for ch in self.client_name.trim().chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        let slug = if slug.is_empty() { "client" } else { slug };
        format!("quote_{}_{}", slug, self.date.format("%Y-%m-%d"))
    }
}

/// Business header block shared by every rendered quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    pub business_name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            business_name: "Trimline Painting Co.".to_string(),
            tagline: "Interior Painting & Trim Specialists".to_string(),
            phone: "(555) 010-2040".to_string(),
            email: "estimates@trimlinepainting.example".to_string(),
        }
    }
}

impl Letterhead {
    /// Header lines, skipping blank fields
    pub fn lines(&self) -> Vec<String> {
        let contact = [self.phone.as_str(), self.email.as_str()]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" | ");

        [self.business_name.clone(), self.tagline.clone(), contact]
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_slugifies_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let client = ClientInfo::new("  Jane O'Doe & Sons ", "12 Elm St", date);
        assert_eq!(client.file_stem(), "quote_jane-o-doe-sons_2024-05-01");
    }

    #[test]
    fn test_file_stem_empty_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let client = ClientInfo::new("", "", date);
        assert_eq!(client.file_stem(), "quote_client_2024-05-01");
    }

    #[test]
    fn test_letterhead_skips_blank_fields() {
        let letterhead = Letterhead {
            business_name: "Acme Paint".to_string(),
            tagline: String::new(),
            phone: String::new(),
            email: "hi@acme.example".to_string(),
        };
        assert_eq!(letterhead.lines(), vec!["Acme Paint", "hi@acme.example"]);
    }
}
