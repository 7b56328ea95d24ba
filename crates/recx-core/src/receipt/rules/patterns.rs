//! Shared regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date pattern families, tried in the priority order declared in
    // rules::dates::pattern_priority.
    pub static ref DATE_DAY_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(\d{1,2})[\s.,/-]*(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[\s.,/-]*(\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME_YEAR: Regex = Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*[\s.,-]*(\d{4})\b"
    ).unwrap();

    // A currency amount: optional glyph, comma-grouped digits, optional
    // 1-2 digit decimal part. A bare integer with neither glyph nor
    // decimals is not treated as currency.
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        r"(?i)(?:₹|rs\.?|inr|\$|€|£)\s*(\d[\d,]*(?:\.\d{1,2})?)|(\b\d[\d,]*\.\d{1,2}\b)"
    ).unwrap();

    // Totals labels scanned per line.
    pub static ref SUBTOTAL_LINE: Regex = Regex::new(
        r"(?i)\bsub\s*-?\s*total\b"
    ).unwrap();

    pub static ref GRAND_TOTAL_LINE: Regex = Regex::new(
        r"(?i)\bgrand\s*total\b|\btotal\s*amount\b|\bamount\s*(?:paid|payable|due)\b|\bnet\s*payable\b|\btotal\s*:"
    ).unwrap();

    pub static ref TAX_KEYWORD: Regex = Regex::new(
        r"(?i)\b(cgst|sgst|igst|gst|vat|tax)\b"
    ).unwrap();

    // Labeled tax entry: keyword, a percentage rate, then an amount.
    pub static ref TAX_LABELED: Regex = Regex::new(
        r"(?i)\b(cgst|sgst|igst|gst|vat|tax)\b[^%\n]{0,24}?(\d{1,2}(?:\.\d+)?)\s*%[^\d\n]{0,8}(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    // Labeled single-figure total lookups, tried in the priority order
    // declared in rules::amounts::labeled_total_priority.
    pub static ref GRAND_TOTAL_LABELED: Regex = Regex::new(
        r"(?i)\bgrand\s*total\b[^\d\n]{0,12}(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref TOTAL_AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)\btotal\s*amount\b[^\d\n]{0,12}(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref AMOUNT_PAID_LABELED: Regex = Regex::new(
        r"(?i)\bamount\s*paid\b[^\d\n]{0,12}(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref NET_PAYABLE_LABELED: Regex = Regex::new(
        r"(?i)\bnet\s*payable\b[^\d\n]{0,12}(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)\btotal\b[^\d\n]{0,12}(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)\bamount\b[^\d\n]{0,12}(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    // Reversed form: the figure precedes the total/grand keyword.
    pub static ref TOTAL_REVERSED: Regex = Regex::new(
        r"(?i)(\d[\d,]*(?:\.\d{1,2})?)\s*(?:/-)?\s*(?:₹|rs\.?|inr)?\s*(?:total|grand)\b"
    ).unwrap();

    // Merchant header heuristics.
    pub static ref MERCHANT_EXCLUDE: Regex = Regex::new(
        r"(?i)\b(gst|gstin|invoice|tax|date|phone|address|receipt|bill|tel|email|www|cashier|total|subtotal)\b"
    ).unwrap();

    pub static ref MERCHANT_SUFFIX: Regex = Regex::new(
        r"(?i)\b(?:[a-z][a-z'&.]*[ ])?[a-z'&.]*(?:mart|store|supermarket|hyperstore|pharmacy|chemist)s?\b"
    ).unwrap();

    // Line item heuristics.
    pub static ref ITEM_SKIP: Regex = Regex::new(
        r"(?i)total|tax|gst|invoice|amount"
    ).unwrap();

    pub static ref COLUMN_SPLIT: Regex = Regex::new(
        r" {2,}|\t"
    ).unwrap();

    pub static ref ITEM_INLINE: Regex = Regex::new(
        r"(?i)^(.+?)\s+(?:(?:₹|rs\.?|inr|\$|€|£)\s*(\d[\d,]*(?:\.\d{1,2})?)|(\d[\d,]*\.\d{1,2}))\s*(?:/-)?$"
    ).unwrap();

    // Orchestrator label searches.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)\b(?:invoice|inv|bill|receipt)\s*(?:no|num|number|#)?\s*[:#.\-]?\s*([A-Za-z0-9][A-Za-z0-9/\-]*)"
    ).unwrap();

    pub static ref PAYMENT_MODE_LABELED: Regex = Regex::new(
        r"(?i)\bpayment\s*(?:mode|method)?\s*[:\-][ ]*([a-z]+(?: [a-z]+)?)"
    ).unwrap();

    pub static ref PAYMENT_KEYWORD: Regex = Regex::new(
        r"(?i)\b(upi|card|cash|netbanking|paytm)\b"
    ).unwrap();

    pub static ref REFERENCE_LABELED: Regex = Regex::new(
        r"(?i)\b(?:reference|ref)\b\.?[ ]*(?:no|id|number)?\.?[ ]*[:#\-]?[ ]*([A-Za-z0-9]+)"
    ).unwrap();

    pub static ref MASKED_ACCOUNT: Regex = Regex::new(
        r"(?:[Xx]{2,}|\*{2,})[ -]?\d{3,}\b"
    ).unwrap();
}
