use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format amount with currency symbol, the currency's number of decimal
/// places, and thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let factor = 10_i64.pow(decimal_places);
    let minor_units = (amount.abs() * factor as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 {
        "-"
    } else {
        ""
    };
    let integer_part = (minor_units / factor).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{} {}", sign, integer_part, currency.symbol())
    } else {
        format!(
            "{}{}.{:0width$} {}",
            sign,
            integer_part,
            minor_units % factor,
            currency.symbol(),
            width = decimal_places as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_uses_currency_decimals() {
        assert_eq!(
            format_amount(1234.5, Currency::USD),
            format!("1,234.50 {}", Currency::USD.symbol())
        );
        assert_eq!(
            format_amount(1234.5, Currency::JPY),
            format!("1,235 {}", Currency::JPY.symbol())
        );
    }

    #[test]
    fn test_format_amount_keeps_sign_of_small_negatives() {
        assert_eq!(
            format_amount(-0.5, Currency::USD),
            format!("-0.50 {}", Currency::USD.symbol())
        );
        assert_eq!(
            format_amount(-1234567.891, Currency::USD),
            format!("-1,234,567.89 {}", Currency::USD.symbol())
        );
    }

    #[test]
    fn test_format_amount_carries_rounding() {
        assert_eq!(
            format_amount(9.999, Currency::USD),
            format!("10.00 {}", Currency::USD.symbol())
        );
        assert_eq!(
            format_amount(-0.001, Currency::USD),
            format!("0.00 {}", Currency::USD.symbol())
        );
    }
}
