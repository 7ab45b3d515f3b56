use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format a whole-unit amount with thousands separators and the currency
/// symbol, padding the minor unit with zeros for currencies that have one
/// (ex. 1,000 ¥, 1,000.00 $).
///
/// For consistency, uses en locale regardless of user's locale or currency.
pub(crate) fn format_amount(amount: i64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let integer_part = amount.to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{} {}", integer_part, currency.symbol())
    } else {
        format!(
            "{}.{:0decimal_places$} {}",
            integer_part,
            0,
            currency.symbol()
        )
    }
}

/// Like `format_amount`, but always prefixes a sign.
pub(crate) fn format_signed_amount(amount: i64, currency: Currency) -> String {
    if amount > 0 {
        format!("+{}", format_amount(amount, currency))
    } else {
        format_amount(amount, currency)
    }
}
