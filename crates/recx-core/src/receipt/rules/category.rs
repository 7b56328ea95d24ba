//! Category tagging via keyword lookup.

use crate::models::record::Category;

/// Ordered category → keyword table. Declaration order is matching
/// priority: the first category with any keyword hit wins, so earlier rows
/// shadow later ones.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Groceries,
        &[
            "grocery",
            "vegetable",
            "fruit",
            "dairy",
            "milk",
            "egg",
            "bread",
            "kirana",
            "provision",
        ],
    ),
    (
        Category::Travel,
        &[
            "taxi", "uber", "ola cab", "oyo", "hotel", "railway", "airline", "flight", "irctc",
        ],
    ),
    (
        Category::Health,
        &[
            "pharma",
            "medicine",
            "hospital",
            "clinic",
            "chemist",
            "diagnostic",
        ],
    ),
    (
        Category::Dining,
        &["restaurant", "cafe", "food", "meal", "dine"],
    ),
    (
        Category::Fuel,
        &[
            "petrol",
            "diesel",
            "fuel",
            "hpcl",
            "bpcl",
            "iocl",
            "filling station",
        ],
    ),
    (
        Category::Shopping,
        &[
            "apparel",
            "clothing",
            "fashion",
            "footwear",
            "electronics",
            "mall",
        ],
    ),
    (
        Category::Utilities,
        &["electricity", "broadband", "recharge", "dth", "postpaid"],
    ),
];

/// Assign a spending category to the normalized text.
///
/// Case-insensitive substring search over the whole document; exactly one
/// label is returned, [`Category::General`] when nothing matches.
pub fn categorize(text: &str) -> Category {
    let haystack = text.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *category;
        }
    }

    Category::General
}
