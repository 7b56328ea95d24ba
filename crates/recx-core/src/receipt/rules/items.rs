//! Line item detection.

use rust_decimal::Decimal;

use crate::models::record::LineItem;

use super::amounts::parse_amount;
use super::patterns::{COLUMN_SPLIT, ITEM_INLINE, ITEM_SKIP};

/// Extract purchased items from normalized lines, in document order.
///
/// Lines carrying totals/tax/header keywords are skipped outright, even
/// when they would otherwise parse as a structured row. Each surviving line
/// is tried as a columned row (tokens separated by runs of two or more
/// spaces or tabs) and, when that shape is absent, as an inline
/// "description then currency amount" row. Items are not reconciled
/// against the detected grand total.
pub fn extract_items(lines: &[String]) -> Vec<LineItem> {
    let mut items = Vec::new();

    for line in lines {
        if ITEM_SKIP.is_match(line) {
            continue;
        }

        let tokens: Vec<&str> = COLUMN_SPLIT
            .split(line)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let columned = tokens.len() >= 2
            && tokens
                .last()
                .and_then(|t| parse_amount(t))
                .is_some();

        if columned {
            if let Some(item) = columned_item(&tokens) {
                items.push(item);
            }
        } else if let Some(item) = inline_item(line) {
            items.push(item);
        }
    }

    items
}

/// Structured row: `description [quantity [unit price]] total`.
fn columned_item(tokens: &[&str]) -> Option<LineItem> {
    let line_total = parse_amount(tokens.last()?)?;
    if line_total.is_zero() {
        return None;
    }

    let n = tokens.len();
    let (quantity, desc_end) = if n >= 3 {
        let second_last = tokens[n - 2];
        if let Some(qty) = parse_quantity(second_last) {
            // Quantities are not bounds-checked; a large integer column is
            // read as a quantity.
            (qty, n - 2)
        } else if n >= 4 && second_last.contains('.') && parse_amount(second_last).is_some() {
            // Four-column layout: the second-to-last token is the unit
            // price column, the one before it the quantity.
            match parse_quantity(tokens[n - 3]) {
                Some(qty) => (qty, n - 3),
                None => (1, n - 1),
            }
        } else {
            (1, n - 1)
        }
    } else {
        (1, n - 1)
    };

    let description = tokens[..desc_end].join(" ");

    Some(build_item(description, quantity, line_total))
}

/// Loose row: any description followed by a trailing currency amount.
fn inline_item(line: &str) -> Option<LineItem> {
    let caps = ITEM_INLINE.captures(line)?;

    let description = caps[1].trim().to_string();
    if !description.chars().any(|c| c.is_alphabetic()) {
        return None;
    }

    let amount = caps
        .get(2)
        .or_else(|| caps.get(3))
        .and_then(|m| parse_amount(m.as_str()))?;

    Some(build_item(description, 1, amount))
}

fn build_item(description: String, quantity: u32, line_total: Decimal) -> LineItem {
    let description = if description.trim().is_empty() {
        "Item".to_string()
    } else {
        description
    };

    // unit price is derived from the line total whenever the quantity is
    // known; with the default quantity of 1 the two coincide.
    let unit_price = (line_total / Decimal::from(quantity.max(1))).round_dp(2);

    LineItem {
        description,
        quantity: quantity.max(1),
        unit_price,
        line_total,
    }
}

fn parse_quantity(token: &str) -> Option<u32> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok().filter(|&q| q > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_four_column_row() {
        let items = extract_items(&lines(&["Wireless Keyboard   2   1299.00   2598.00"]));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Wireless Keyboard");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_price, dec("1299.00"));
        assert_eq!(items[0].line_total, dec("2598.00"));
    }

    #[test]
    fn test_three_column_row() {
        let items = extract_items(&lines(&["Milk Packet  2  64.00"]));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Milk Packet");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_price, dec("32.00"));
        assert_eq!(items[0].line_total, dec("64.00"));
    }

    #[test]
    fn test_two_column_row_defaults_quantity() {
        let items = extract_items(&lines(&["Samosa  25.00"]));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].unit_price, dec("25.00"));
        assert_eq!(items[0].line_total, dec("25.00"));
    }

    #[test]
    fn test_keyword_skip_beats_structured_row() {
        let items = extract_items(&lines(&["Subtotal   1   100.00   100.00"]));
        assert!(items.is_empty());
    }

    #[test]
    fn test_skips_totals_and_tax_lines() {
        let items = extract_items(&lines(&[
            "TOTAL: ₹500.00",
            "CGST @9%: ₹22.50",
            "Invoice No: 42",
            "Amount Due  500.00",
        ]));
        assert!(items.is_empty());
    }

    #[test]
    fn test_inline_row_with_glyph() {
        let items = extract_items(&lines(&["Maggi Noodles ₹45.00"]));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Maggi Noodles");
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].line_total, dec("45.00"));
    }

    #[test]
    fn test_inline_row_with_decimal_amount() {
        let items = extract_items(&lines(&["Dettol Soap 38.50"]));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Dettol Soap");
        assert_eq!(items[0].line_total, dec("38.50"));
    }

    #[test]
    fn test_zero_priced_row_not_emitted() {
        let items = extract_items(&lines(&["Carry Bag   0.00"]));
        assert!(items.is_empty());
    }

    #[test]
    fn test_large_integer_column_read_as_quantity() {
        // The second-to-last token is taken as quantity without a
        // plausibility bound.
        let items = extract_items(&lines(&["Gadget   1299   2598.00"]));

        assert_eq!(items[0].quantity, 1299);
        assert_eq!(items[0].unit_price, dec("2.00"));
    }

    #[test]
    fn test_document_order_preserved() {
        let items = extract_items(&lines(&["Bread  40.00", "Butter  58.00"]));
        assert_eq!(items[0].description, "Bread");
        assert_eq!(items[1].description, "Butter");
    }

    #[test]
    fn test_unmatched_lines_yield_nothing() {
        let items = extract_items(&lines(&["----------------", "thank you, visit again"]));
        assert!(items.is_empty());
    }
}
