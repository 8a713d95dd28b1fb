use std::collections::HashMap;

use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use regex::Regex;

/// Statement amounts are rendered in rupees; the engine itself performs no
/// currency conversion.
pub(crate) const STATEMENT_CURRENCY: Currency = Currency::INR;

/// Format a cash amount with the currency symbol, the currency's standard
/// number of decimal places, and thousands separators. Uses the en locale
/// ('.' as decimal mark, i.e. 1,000.00) regardless of the user's locale.
pub(crate) fn format_amount(amount: f64) -> String {
    let decimal_places = STATEMENT_CURRENCY.exponent().unwrap_or(0) as usize;
    let integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return format!("{} {}", integer_part, STATEMENT_CURRENCY.symbol());
    }
    let fractional_part = format!("{:.decimal_places$}", amount.fract().abs())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}.{:0decimal_places$} {}",
        integer_part,
        fractional_part,
        STATEMENT_CURRENCY.symbol(),
    )
}

/// Replace placeholders of the form `{{Key}}` with their values. Unknown
/// keys are left in place; the report templates are hardcoded, so every key
/// they use is supplied by the printer.
pub(crate) fn replace_placeholders(content: &str, placeholders: &HashMap<String, String>) -> String {
    let placeholder_pattern =
        Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid");
    placeholder_pattern
        .replace_all(content, |caps: &regex::Captures| {
            let key = &caps[1]; // The content inside {{ }}.
            placeholders
                .get(key)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
