//! Merchant name extraction from the receipt header.

use crate::models::record::UNKNOWN_MERCHANT;

use super::patterns::{MERCHANT_EXCLUDE, MERCHANT_SUFFIX};

/// Receipts put the merchant name in the header; only this many leading
/// lines are scanned.
const HEADER_WINDOW: usize = 6;

/// Fraction of uppercase letters above which a header line is favored.
const UPPERCASE_DENSITY_THRESHOLD: f64 = 0.18;

/// Extract the merchant name from the document's leading lines.
///
/// A candidate line has at least one letter, more than three characters,
/// is not purely numeric/punctuation and carries no structural keyword
/// (GST, INVOICE, TAX, ...). Capitalized candidates are preferred since
/// merchant headers are typically uppercase; otherwise the first candidate
/// wins. When no header line qualifies, a full-text search for
/// merchant-type suffix words (mart, store, pharmacy, ...) is tried before
/// giving up with [`UNKNOWN_MERCHANT`].
pub fn extract_merchant(lines: &[String]) -> String {
    let candidates: Vec<&String> = lines
        .iter()
        .take(HEADER_WINDOW)
        .filter(|line| is_candidate(line))
        .collect();

    if let Some(line) = candidates.iter().find(|line| looks_capitalized(line)) {
        return line.to_string();
    }
    if let Some(line) = candidates.first() {
        return line.to_string();
    }

    for line in lines {
        if let Some(m) = MERCHANT_SUFFIX.find(line) {
            return m.as_str().to_uppercase();
        }
    }

    UNKNOWN_MERCHANT.to_string()
}

fn is_candidate(line: &str) -> bool {
    line.len() > 3
        && line.chars().any(|c| c.is_alphabetic())
        && !line
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_punctuation() || c.is_whitespace())
        && !MERCHANT_EXCLUDE.is_match(line)
}

fn looks_capitalized(line: &str) -> bool {
    let letters: Vec<char> = line.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }

    if letters.iter().all(|c| c.is_uppercase()) {
        return true;
    }

    let upper = letters.iter().filter(|c| c.is_uppercase()).count();
    upper as f64 / letters.len() as f64 > UPPERCASE_DENSITY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_picks_uppercase_header_line() {
        let doc = lines(&["SUPERFRESH MART", "GST NO: 12345", "TOTAL: ₹500.00"]);
        assert_eq!(extract_merchant(&doc), "SUPERFRESH MART");
    }

    #[test]
    fn test_skips_structural_keyword_lines() {
        let doc = lines(&["TAX INVOICE", "Royal Traders", "Date: 12/01/2024"]);
        assert_eq!(extract_merchant(&doc), "Royal Traders");
    }

    #[test]
    fn test_prefers_capitalized_line_over_earlier_candidate() {
        let doc = lines(&["welcome dear customer", "BIG BAZAAR HYPERSTORE", "thank you"]);
        assert_eq!(extract_merchant(&doc), "BIG BAZAAR HYPERSTORE");
    }

    #[test]
    fn test_ignores_lines_beyond_header_window() {
        let doc = lines(&[
            "12345",
            "---",
            "+91 98765",
            "===",
            "....",
            "#222",
            "ACME TRADERS",
        ]);
        // Line 7 is outside the header window and no suffix word appears.
        assert_eq!(extract_merchant(&doc), UNKNOWN_MERCHANT);
    }

    #[test]
    fn test_suffix_fallback_when_header_disqualified() {
        let doc = lines(&[
            "GSTIN 29ABCDE1234F1Z5",
            "TAX INVOICE",
            "12345",
            "PHONE: 98765 43210",
            "DATE: 01/01/2024",
            "BILL NO: 42",
            "visit apollo pharmacy again",
        ]);
        assert_eq!(extract_merchant(&doc), "APOLLO PHARMACY");
    }

    #[test]
    fn test_short_and_numeric_lines_rejected() {
        let doc = lines(&["abc", "9999", "--=--"]);
        assert_eq!(extract_merchant(&doc), UNKNOWN_MERCHANT);
    }

    #[test]
    fn test_empty_lines_give_sentinel() {
        assert_eq!(extract_merchant(&[]), UNKNOWN_MERCHANT);
    }
}
