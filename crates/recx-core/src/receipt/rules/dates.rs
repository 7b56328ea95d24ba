//! Transaction date extraction.

use regex::Regex;

use super::patterns::{DATE_DAY_MONTH_NAME, DATE_ISO, DATE_MONTH_NAME_YEAR, DATE_NUMERIC};

/// Date pattern families in priority order. The order itself is part of the
/// contract: earlier families win regardless of where in the document a
/// later family would match.
pub(crate) fn pattern_priority() -> [(&'static str, &'static Regex); 4] {
    [
        ("day-month-name-year", &DATE_DAY_MONTH_NAME),
        ("numeric-dmy", &DATE_NUMERIC),
        ("iso-ymd", &DATE_ISO),
        ("month-name-year", &DATE_MONTH_NAME_YEAR),
    ]
}

/// Extract the transaction date from normalized text.
///
/// Returns the matched span verbatim, in its original detected format; the
/// engine never reparses it into a calendar type. Empty string when no
/// family matches. Calendar plausibility is not checked: 31/02 is accepted
/// as-is.
pub fn extract_date(text: &str) -> String {
    for (_, pattern) in pattern_priority() {
        if let Some(m) = pattern.find(text) {
            return m.as_str().to_string();
        }
    }

    String::new()
}
