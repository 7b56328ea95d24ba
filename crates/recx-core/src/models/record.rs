//! Receipt data models produced by the extraction engine.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel merchant name when no header line qualifies.
pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

/// Sentinel returned by [`find_total`](crate::receipt::rules::amounts::find_total)
/// when the text contains no figure at all.
pub const TOTAL_NOT_FOUND: &str = "-";

/// A single purchased unit detected on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description. Falls back to "Item" when blank.
    pub description: String,

    /// Quantity, a positive integer. Defaults to 1 when absent.
    pub quantity: u32,

    /// Price per unit. Derived as `line_total / quantity` (rounded to two
    /// decimals) when both are known, otherwise equal to `line_total`.
    pub unit_price: Decimal,

    /// Total for this line.
    pub line_total: Decimal,
}

/// Reconciled view of a document's monetary figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalsSummary {
    /// Labeled subtotal, or the second-to-last detected amount when at
    /// least two amounts exist and no label matched.
    pub subtotal: Decimal,

    /// Accumulated tax amount across all detected tax lines.
    pub tax: Decimal,

    /// Tax amounts keyed by their uppercased label (e.g. "CGST", "SGST").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tax_breakdown: BTreeMap<String, Decimal>,

    /// Labeled grand total, or the last detected amount when no label
    /// matched.
    pub grand_total: Decimal,

    /// Every currency-formatted amount in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_amounts: Vec<Decimal>,
}

/// Spending category assigned to a receipt.
///
/// Declaration order is matching priority: the first category whose keyword
/// set hits the document wins (see
/// [`categorize`](crate::receipt::rules::category::categorize)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Groceries,
    Travel,
    Health,
    Dining,
    Fuel,
    Shopping,
    Utilities,
    /// Default when no keyword set matches.
    #[default]
    General,
}

impl Category {
    /// All categories in declaration (priority) order.
    pub const ALL: [Category; 8] = [
        Category::Groceries,
        Category::Travel,
        Category::Health,
        Category::Dining,
        Category::Fuel,
        Category::Shopping,
        Category::Utilities,
        Category::General,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Travel => "Travel",
            Category::Health => "Health",
            Category::Dining => "Dining",
            Category::Fuel => "Fuel",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The structured record derived from one receipt text blob.
///
/// Constructed once per parse call and handed to the caller as an opaque
/// result; the engine retains no reference to it. Missing fields hold their
/// documented sentinel rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Merchant name, or [`UNKNOWN_MERCHANT`].
    pub merchant: String,

    /// Invoice/bill number, empty when not detected.
    pub invoice_number: String,

    /// Transaction date in its original detected format; the engine never
    /// reparses it into a calendar type. Empty when not detected.
    pub date: String,

    /// Monetary totals.
    pub totals: TotalsSummary,

    /// Detected line items in document order, possibly empty.
    pub items: Vec<LineItem>,

    /// Spending category.
    pub category: Category,

    /// Payment mode (e.g. "UPI", "CASH"), empty when not detected.
    pub payment_mode: String,

    /// Transaction reference id, empty when not detected.
    pub reference_id: String,
}

impl ParsedRecord {
    /// Create a record with every field at its sentinel value.
    pub fn new() -> Self {
        Self {
            merchant: UNKNOWN_MERCHANT.to_string(),
            invoice_number: String::new(),
            date: String::new(),
            totals: TotalsSummary::default(),
            items: Vec::new(),
            category: Category::General,
            payment_mode: String::new(),
            reference_id: String::new(),
        }
    }

    /// Fields still at their sentinel value.
    ///
    /// Lets callers distinguish an extraction miss from genuine zero/empty
    /// data without re-deriving the sentinel conventions.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.merchant == UNKNOWN_MERCHANT {
            missing.push("merchant");
        }
        if self.invoice_number.is_empty() {
            missing.push("invoice_number");
        }
        if self.date.is_empty() {
            missing.push("date");
        }
        if self.totals.grand_total.is_zero() {
            missing.push("grand_total");
        }
        if self.items.is_empty() {
            missing.push("items");
        }
        if self.payment_mode.is_empty() {
            missing.push("payment_mode");
        }
        if self.reference_id.is_empty() {
            missing.push("reference_id");
        }

        missing
    }
}

impl Default for ParsedRecord {
    fn default() -> Self {
        Self::new()
    }
}
