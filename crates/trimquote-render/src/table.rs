//! CSV quote
//!
//! Layout:
//!
//! ```text
//! Client,<name>,Project,<project>,Date,<date>,<param>,<value>,...
//! <blank>
//! Item,Cost
//! <name>,<amount>
//! ```

use crate::sections::{single_line, DATE_FORMAT};
use csv::{Terminator, Writer, WriterBuilder};
use trimquote_common::{format_amount, ClientInfo, EstimateResult, RenderError};

fn writer_for(buf: Vec<u8>) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buf)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, RenderError> {
    writer
        .into_inner()
        .map_err(|e| RenderError::Csv(e.to_string()))
}

pub fn render(client: &ClientInfo, result: &EstimateResult) -> Result<Vec<u8>, RenderError> {
    let csv_err = |e: csv::Error| RenderError::Csv(e.to_string());

    let mut metadata = vec![
        "Client".to_string(),
        single_line(&client.client_name),
        "Project".to_string(),
        single_line(&client.project),
        "Date".to_string(),
        client.date.format(DATE_FORMAT).to_string(),
    ];
    for parameter in &result.parameters {
        metadata.push(parameter.label.clone());
        metadata.push(parameter.value.clone());
    }

    let mut writer = writer_for(Vec::new());
    writer.write_record(&metadata).map_err(csv_err)?;
    let mut buf = finish(writer)?;

    // separator row is written raw so it carries no fields at all
    buf.push(b'\n');

    let mut writer = writer_for(buf);
    writer.write_record(["Item", "Cost"]).map_err(csv_err)?;
    for item in result.line_items() {
        writer
            .write_record([item.name.as_str(), format_amount(item.amount).as_str()])
            .map_err(csv_err)?;
    }
    finish(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use trimquote_common::{EstimateKind, LineItem, Parameter};

    #[test]
    fn test_table_layout() {
        let client = ClientInfo::new(
            "Doe, Jane",
            "12 Elm St",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        let result = EstimateResult {
            kind: EstimateKind::Baseboard,
            parameters: vec![Parameter::new("Prep Level", "Medium")],
            items: vec![LineItem::new("Base Price", dec!(150))],
            subtotal: dec!(150),
            materials_fee: Some(LineItem::new("Materials Fee (12%)", dec!(18))),
            total: LineItem::new("Total Price", dec!(168)),
        };

        let bytes = render(&client, &result).unwrap();
        let csv = String::from_utf8(bytes).unwrap();
        assert_eq!(
            csv,
            "Client,\"Doe, Jane\",Project,12 Elm St,Date,2024-05-01,Prep Level,Medium\n\
             \n\
             Item,Cost\n\
             Base Price,150.00\n\
             Materials Fee (12%),18.00\n\
             Total Price,168.00\n"
        );
    }

    #[test]
    fn test_multiline_project_stays_on_metadata_row() {
        let client = ClientInfo::new(
            "Jane",
            "12 Elm St\nUnit 2",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        let result = EstimateResult {
            kind: EstimateKind::House,
            parameters: vec![],
            items: vec![],
            subtotal: dec!(0),
            materials_fee: None,
            total: LineItem::new("Total Price", dec!(0)),
        };

        let csv = String::from_utf8(render(&client, &result).unwrap()).unwrap();
        assert!(csv.starts_with("Client,Jane,Project,12 Elm St Unit 2,Date,2024-05-01\n\n"));
    }
}
