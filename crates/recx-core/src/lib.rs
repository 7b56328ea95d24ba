//! Core library for receipt and invoice text extraction.
//!
//! This crate provides:
//! - Normalization of raw OCR/PDF text into a canonical line-oriented form
//! - Rule-based field extraction (merchant, date, totals, line items,
//!   category, payment metadata)
//! - Receipt data models suitable for JSON serialization by the caller
//!
//! Acquiring the raw text (PDF text layer, OCR) and persisting or rendering
//! the parsed record are caller concerns: the engine is a synchronous pure
//! function of its input text and keeps no state between calls.
//!
//! ```
//! use recx_core::parse_receipt;
//!
//! let record = parse_receipt("SUPERFRESH MART\nTOTAL: ₹500.00");
//! assert_eq!(record.merchant, "SUPERFRESH MART");
//! ```

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{ExtractionError, RecxError, Result};
pub use models::config::{ExtractionConfig, OutputConfig, RecxConfig};
pub use models::record::{
    Category, LineItem, ParsedRecord, TOTAL_NOT_FOUND, TotalsSummary, UNKNOWN_MERCHANT,
};
pub use receipt::{
    ExtractionOutcome, NormalizedDocument, ReceiptParser, RuleReceiptParser, normalize,
    parse_receipt,
};
pub use receipt::rules::{
    categorize, detect_amounts, extract_date, extract_items, extract_merchant, extract_totals,
    find_total, parse_amount,
};
