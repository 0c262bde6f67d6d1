//! Plain-text quote

use crate::sections::QuoteSections;

const RULE_WIDTH: usize = 50;

/// Render sections as a line-oriented UTF-8 document
pub fn render(sections: &QuoteSections) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<&str> = Vec::new();

    lines.extend(sections.letterhead.iter().map(String::as_str));
    lines.push(&rule);
    lines.push(&sections.title);
    lines.push("");
    lines.extend(sections.client.iter().map(String::as_str));
    lines.push("");
    lines.extend(sections.parameters.iter().map(String::as_str));
    lines.push("");
    lines.extend(sections.items.iter().map(String::as_str));
    lines.push(&sections.total);
    lines.push(&rule);
    lines.extend(sections.closing.iter().map(String::as_str));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> QuoteSections {
        QuoteSections {
            letterhead: vec!["Acme Paint".to_string()],
            title: "Baseboard Painting Estimate".to_string(),
            client: vec!["Client: Jane".to_string()],
            parameters: vec!["Linear Feet: 100".to_string()],
            items: vec!["Base Price: $150.00".to_string()],
            total: "Total Price: $168.00".to_string(),
            closing: vec!["Thanks".to_string(), "Gracias".to_string()],
        }
    }

    #[test]
    fn test_layout() {
        let text = render(&sections());
        let rule = "=".repeat(RULE_WIDTH);
        let expected = format!(
            "Acme Paint\n{rule}\nBaseboard Painting Estimate\n\nClient: Jane\n\n\
             Linear Feet: 100\n\nBase Price: $150.00\nTotal Price: $168.00\n{rule}\n\
             Thanks\nGracias\n"
        );
        assert_eq!(text, expected);
    }
}
