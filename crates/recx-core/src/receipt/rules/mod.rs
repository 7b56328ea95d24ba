//! Rule-based field extractors for receipt text.
//!
//! Each extractor is an independent pure function over the same normalized
//! document; none depends on another's output, which keeps them
//! unit-testable in isolation.

pub mod amounts;
pub mod category;
pub mod dates;
pub mod items;
pub mod merchant;
pub mod patterns;

pub use amounts::{detect_amounts, extract_totals, find_total, parse_amount};
pub use category::categorize;
pub use dates::extract_date;
pub use items::extract_items;
pub use merchant::extract_merchant;
