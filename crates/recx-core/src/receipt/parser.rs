//! Rule-based receipt parser combining the normalizer and field extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::{ParsedRecord, UNKNOWN_MERCHANT};

use super::Result;
use super::normalize::normalize;
use super::rules::{
    categorize, extract_date, extract_items, extract_merchant, extract_totals,
    patterns::{
        INVOICE_NUMBER, MASKED_ACCOUNT, PAYMENT_KEYWORD, PAYMENT_MODE_LABELED, REFERENCE_LABELED,
    },
};

/// Result of parsing one receipt text blob.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Structured record assembled from the extractors.
    pub record: ParsedRecord,
    /// Fields that degraded to their sentinel value.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse a receipt from raw extracted text.
    fn parse(&self, text: &str) -> Result<ExtractionOutcome>;
}

/// Rule-based receipt parser.
///
/// Stateless between invocations: every call is a pure function of its
/// input text, holds no locks, performs no I/O and retains no reference to
/// the record it hands back. Concurrent calls need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct RuleReceiptParser {
    strict_input: bool,
}

impl RuleReceiptParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            strict_input: false,
        }
    }

    /// Fail fast on empty or whitespace-only input instead of returning an
    /// all-sentinel record.
    pub fn with_strict_input(mut self, strict: bool) -> Self {
        self.strict_input = strict;
        self
    }

    /// Build a parser from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            strict_input: config.strict_input,
        }
    }

    fn extract_invoice_number(&self, text: &str) -> Option<String> {
        for caps in INVOICE_NUMBER.captures_iter(text) {
            let token = &caps[1];
            // Label words like "Invoice Date" capture their following word;
            // a real document number carries at least one digit.
            if token.chars().any(|c| c.is_ascii_digit()) {
                return Some(token.to_string());
            }
        }

        None
    }

    fn extract_payment_mode(&self, text: &str) -> Option<String> {
        if let Some(caps) = PAYMENT_MODE_LABELED.captures(text) {
            return Some(caps[1].trim().to_uppercase());
        }

        PAYMENT_KEYWORD
            .find(text)
            .map(|m| m.as_str().to_uppercase())
    }

    fn extract_reference_id(&self, text: &str) -> Option<String> {
        if let Some(caps) = REFERENCE_LABELED.captures(text) {
            return Some(caps[1].to_string());
        }

        MASKED_ACCOUNT.find(text).map(|m| m.as_str().to_string())
    }
}

impl ReceiptParser for RuleReceiptParser {
    fn parse(&self, text: &str) -> Result<ExtractionOutcome> {
        let start = Instant::now();

        if self.strict_input && text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        info!("parsing receipt from {} characters of text", text.len());

        let doc = normalize(text);
        let mut warnings = Vec::new();

        let merchant = extract_merchant(&doc.lines);
        if merchant == UNKNOWN_MERCHANT {
            warnings.push("could not extract merchant name".to_string());
        }

        let date = extract_date(&doc.text);
        if date.is_empty() {
            warnings.push("could not extract transaction date".to_string());
        }

        let totals = extract_totals(&doc.lines);
        let items = extract_items(&doc.lines);
        if items.is_empty() {
            warnings.push("could not extract line items".to_string());
        }

        let category = categorize(&doc.text);

        let invoice_number = self.extract_invoice_number(&doc.text);
        if invoice_number.is_none() {
            warnings.push("could not extract invoice number".to_string());
        }

        let payment_mode = self.extract_payment_mode(&doc.text);
        let reference_id = self.extract_reference_id(&doc.text);

        let record = ParsedRecord {
            merchant,
            invoice_number: invoice_number.unwrap_or_default(),
            date,
            totals,
            items,
            category,
            payment_mode: payment_mode.unwrap_or_default(),
            reference_id: reference_id.unwrap_or_default(),
        };

        debug!(
            "assembled record for {} ({} items, {} total, category {})",
            record.merchant,
            record.items.len(),
            record.totals.grand_total,
            record.category
        );

        Ok(ExtractionOutcome {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Parse a receipt with the default rule parser, discarding diagnostics.
pub fn parse_receipt(text: &str) -> ParsedRecord {
    RuleReceiptParser::new()
        .parse(text)
        .map(|outcome| outcome.record)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::Category;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_basic_receipt() {
        let text = "\
SUPERFRESH MART
12 MG Road, Bengaluru
GSTIN: 29ABCDE1234F1Z5
Date: 15/03/2024
Invoice No: INV-4021

Basmati Rice 5kg   1   450.00   450.00
Milk 1L   2   32.00   64.00
Sunflower Oil 1L   1   185.00   185.00

Subtotal: ₹699.00
CGST @2.5%: ₹17.48
SGST @2.5%: ₹17.48
GRAND TOTAL: ₹733.96

Payment Mode: UPI
Ref No: 405512345678
";

        let outcome = RuleReceiptParser::new().parse(text).unwrap();
        let record = outcome.record;

        assert_eq!(record.merchant, "SUPERFRESH MART");
        assert_eq!(record.date, "15/03/2024");
        assert_eq!(record.invoice_number, "INV-4021");
        assert_eq!(record.category, Category::Groceries);
        assert_eq!(record.payment_mode, "UPI");
        assert_eq!(record.reference_id, "405512345678");

        assert_eq!(record.totals.subtotal, dec("699.00"));
        assert_eq!(record.totals.grand_total, dec("733.96"));
        assert_eq!(record.totals.tax, dec("34.96"));
        assert_eq!(record.totals.tax_breakdown.len(), 2);

        assert_eq!(record.items.len(), 3);
        assert_eq!(record.items[0].line_total, dec("450.00"));
        assert_eq!(record.items[1].line_total, dec("64.00"));
        assert_eq!(record.items[2].line_total, dec("185.00"));
    }

    #[test]
    fn test_empty_input_yields_sentinel_record() {
        let outcome = RuleReceiptParser::new().parse("").unwrap();

        assert_eq!(outcome.record, ParsedRecord::default());
        assert!(!outcome.warnings.is_empty());
    }

    #[test]
    fn test_strict_input_rejects_blank_text() {
        let parser = RuleReceiptParser::new().with_strict_input(true);
        assert!(matches!(
            parser.parse("   \n  "),
            Err(ExtractionError::EmptyInput)
        ));
    }

    #[test]
    fn test_bare_payment_keyword() {
        let record = parse_receipt("CITY STORES\npaid via upi ref 88100212");
        assert_eq!(record.payment_mode, "UPI");
        assert_eq!(record.reference_id, "88100212");
    }

    #[test]
    fn test_masked_account_as_reference() {
        let record = parse_receipt("CITY STORES\ncard ending XXXX1234");
        assert_eq!(record.reference_id, "XXXX1234");
    }

    #[test]
    fn test_invoice_label_without_number_is_skipped() {
        let record = parse_receipt("CITY STORES\nInvoice Date: 15/03/2024");
        assert_eq!(record.invoice_number, "");
        assert_eq!(record.date, "15/03/2024");
    }

    #[test]
    fn test_each_call_is_independent() {
        let parser = RuleReceiptParser::new();
        let first = parser.parse("ACME TRADERS\nTOTAL: ₹100.00").unwrap();
        let second = parser.parse("no receipt content").unwrap();

        assert_eq!(first.record.totals.grand_total, dec("100.00"));
        assert!(second.record.totals.grand_total.is_zero());
        assert!(second.record.totals.all_amounts.is_empty());
    }
}
