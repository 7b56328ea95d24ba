//! Monetary amount parsing and totals extraction.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::record::{TOTAL_NOT_FOUND, TotalsSummary};

use super::patterns::{
    AMOUNT_LABELED, AMOUNT_PAID_LABELED, CURRENCY_AMOUNT, GRAND_TOTAL_LABELED, GRAND_TOTAL_LINE,
    NET_PAYABLE_LABELED, SUBTOTAL_LINE, TAX_KEYWORD, TAX_LABELED, TOTAL_AMOUNT_LABELED,
    TOTAL_LABELED, TOTAL_REVERSED,
};

/// Parse a locale-formatted currency token ("₹1,234.50", "Rs. 500",
/// "2598.00") into a non-negative two-decimal amount.
///
/// Grouping separators and currency glyphs are stripped before conversion.
/// A corrupted numeric token (e.g. OCR-mangled digits) yields `None` and is
/// treated as absent by the callers rather than aborting the parse.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let cleaned: String = raw[start..]
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Decimal::from_str(cleaned.trim_end_matches('.'))
        .ok()
        .map(|d| d.round_dp(2))
}

/// Every currency-formatted amount in `text`, in order of appearance.
/// Percentage figures (tax rates) are not amounts and are skipped.
pub fn detect_amounts(text: &str) -> Vec<Decimal> {
    CURRENCY_AMOUNT
        .captures_iter(text)
        .filter(|caps| {
            let end = caps.get(0).unwrap().end();
            !text[end..].starts_with('%')
        })
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .filter_map(|m| parse_amount(m.as_str()))
        .collect()
}

/// Scan normalized lines for subtotal, grand total and tax figures.
///
/// Each line is checked against the subtotal, grand-total and tax labels in
/// that order; independently of any label, every currency amount on the
/// line is collected into `all_amounts` in document order. An unlabeled
/// grand total defaults to the last detected amount; an unlabeled subtotal
/// to the second-to-last when at least two amounts exist.
pub fn extract_totals(lines: &[String]) -> TotalsSummary {
    let mut totals = TotalsSummary::default();
    let mut subtotal: Option<Decimal> = None;
    let mut grand_total: Option<Decimal> = None;

    for line in lines {
        let amounts = detect_amounts(line);

        if SUBTOTAL_LINE.is_match(line) {
            if subtotal.is_none() {
                subtotal = amounts.last().copied();
            }
        } else if GRAND_TOTAL_LINE.is_match(line) {
            if grand_total.is_none() {
                grand_total = amounts.last().copied();
            }
        } else if TAX_KEYWORD.is_match(line) {
            if let Some(caps) = TAX_LABELED.captures(line) {
                if let Some(amount) = parse_amount(&caps[3]) {
                    let label = caps[1].to_uppercase();
                    *totals.tax_breakdown.entry(label).or_default() += amount;
                    totals.tax += amount;
                }
            } else if let Some(amount) = amounts.last() {
                // No rate+amount pair on the line; the trailing amount is
                // still the best guess for the tax figure.
                totals.tax += *amount;
            }
        }

        totals.all_amounts.extend(amounts);
    }

    if grand_total.is_none() {
        grand_total = totals.all_amounts.last().copied();
    }
    if subtotal.is_none() && totals.all_amounts.len() >= 2 {
        subtotal = totals
            .all_amounts
            .get(totals.all_amounts.len() - 2)
            .copied();
    }

    totals.subtotal = subtotal.unwrap_or_default();
    totals.grand_total = grand_total.unwrap_or_default();
    totals
}

/// Labeled total patterns in priority order. As with the date families,
/// the order is part of the contract.
pub(crate) fn labeled_total_priority() -> [(&'static str, &'static Regex); 7] {
    [
        ("grand-total", &GRAND_TOTAL_LABELED),
        ("total-amount", &TOTAL_AMOUNT_LABELED),
        ("amount-paid", &AMOUNT_PAID_LABELED),
        ("net-payable", &NET_PAYABLE_LABELED),
        ("total", &TOTAL_LABELED),
        ("amount", &AMOUNT_LABELED),
        ("reversed", &TOTAL_REVERSED),
    ]
}

/// Standalone single-figure total lookup over the whole text.
///
/// Tries the labeled patterns in priority order and returns the first
/// capture as a normalized numeric string (e.g. "1234.50"). When no label
/// matches, falls back to the numerically largest currency-like figure in
/// the text: on a receipt the grand total is usually the largest single
/// amount. Returns "-" when nothing at all is found.
pub fn find_total(text: &str) -> String {
    for (_, pattern) in labeled_total_priority() {
        if let Some(amount) = pattern
            .captures(text)
            .and_then(|caps| parse_amount(&caps[1]))
        {
            return amount.to_string();
        }
    }

    detect_amounts(text)
        .into_iter()
        .max()
        .map(|amount| amount.to_string())
        .unwrap_or_else(|| TOTAL_NOT_FOUND.to_string())
}
