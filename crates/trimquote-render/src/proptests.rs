//! Rendered documents list line items exactly as the result orders them

use crate::QuoteFormatter;
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use trimquote_common::{ClientInfo, EstimateKind, EstimateResult, LineItem};

fn line_item() -> impl Strategy<Value = LineItem> {
    ("[A-Z][A-Za-z ,()%-]{0,24}[a-z]", 0i64..10_000_000)
        .prop_map(|(name, cents)| LineItem::new(name, Decimal::new(cents, 2)))
}

fn estimate() -> impl Strategy<Value = EstimateResult> {
    (
        proptest::collection::vec(line_item(), 1..8),
        proptest::option::of(line_item()),
        line_item(),
    )
        .prop_map(|(items, materials_fee, total)| EstimateResult {
            kind: EstimateKind::Baseboard,
            parameters: Vec::new(),
            items,
            subtotal: Decimal::ZERO,
            materials_fee,
            total,
        })
}

fn client() -> ClientInfo {
    ClientInfo::new(
        "Pat Smith",
        "4 Oak Ave",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
}

proptest! {
    #[test]
    fn text_lists_items_in_result_order(result in estimate()) {
        let text = QuoteFormatter::default().render_text(&client(), &result);

        let mut cursor = 0;
        for item in result.line_items() {
            let needle = format!("\n{}\n", item.display_line());
            let found = text[cursor..].find(&needle);
            prop_assert!(found.is_some(), "missing {:?}", needle);
            cursor += found.unwrap_or(0) + 1;
        }
    }

    #[test]
    fn table_rows_match_result_order(result in estimate()) {
        let bytes = QuoteFormatter::default().render_table(&client(), &result).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        let header = rows.iter().position(|r| r.iter().eq(["Item", "Cost"])).unwrap();

        let rendered: Vec<(String, String)> = rows[header + 1..]
            .iter()
            .map(|r| (r[0].to_string(), r[1].to_string()))
            .collect();
        let expected: Vec<(String, String)> = result
            .line_items()
            .map(|i| (i.name.clone(), trimquote_common::format_amount(i.amount)))
            .collect();
        prop_assert_eq!(rendered, expected);
    }
}
