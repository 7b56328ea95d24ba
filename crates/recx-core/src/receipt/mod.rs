//! Receipt field extraction module.

mod parser;

pub mod normalize;
pub mod rules;

pub use normalize::{NormalizedDocument, normalize};
pub use parser::{ExtractionOutcome, ReceiptParser, RuleReceiptParser, parse_receipt};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
