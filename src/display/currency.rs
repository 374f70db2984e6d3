//! Currency formatting
//!
//! Renders an amount in the user's base currency using the conventions of
//! the locale associated with that currency. No conversion happens; only the
//! presentation changes.

use crate::models::{CurrencyCode, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// `$1.00`
    Prefix,
    /// `ZWL 1.00`
    PrefixSpaced,
    /// `1,00 €`
    SuffixSpaced,
}

#[derive(Debug, Clone, Copy)]
struct Convention<'a> {
    symbol: &'a str,
    placement: Placement,
    grouping: char,
    decimal: char,
    fraction_digits: u32,
}

impl<'a> Convention<'a> {
    const fn new(
        symbol: &'a str,
        placement: Placement,
        grouping: char,
        decimal: char,
        fraction_digits: u32,
    ) -> Self {
        Self {
            symbol,
            placement,
            grouping,
            decimal,
            fraction_digits,
        }
    }
}

fn known_convention(code: &str) -> Option<Convention<'static>> {
    use Placement::*;

    let convention = match code {
        "USD" => Convention::new("$", Prefix, ',', '.', 2),
        "EUR" => Convention::new("€", SuffixSpaced, '.', ',', 2),
        "GBP" => Convention::new("£", Prefix, ',', '.', 2),
        "JPY" => Convention::new("￥", Prefix, ',', '.', 0),
        "CNY" => Convention::new("¥", Prefix, ',', '.', 2),
        "VND" => Convention::new("₫", SuffixSpaced, '.', ',', 0),
        "ZWL" => Convention::new("ZWL", PrefixSpaced, ',', '.', 2),
        _ => return None,
    };
    Some(convention)
}

/// Codes with dedicated formatting, in display order
pub const SUPPORTED_CURRENCIES: [&str; 7] = ["USD", "EUR", "GBP", "JPY", "CNY", "VND", "ZWL"];

/// Format `amount` in `code`
///
/// Unknown but well-formed codes use US conventions with the code as prefix.
/// Malformed codes render as `"<amount> <code>"`.
pub fn format_money(amount: Money, code: &CurrencyCode) -> String {
    let convention = match known_convention(code.as_str()) {
        Some(convention) => convention,
        None if code.is_well_formed() => {
            Convention::new(code.as_str(), Placement::PrefixSpaced, ',', '.', 2)
        }
        None => return format!("{} {}", amount.to_decimal_string(), code),
    };

    let (negative, number) = if convention.fraction_digits == 0 {
        let units = amount.rounded_units();
        (
            units < 0,
            group_digits(units.unsigned_abs(), convention.grouping),
        )
    } else {
        (
            amount.is_negative(),
            format!(
                "{}{}{:02}",
                group_digits(amount.units().unsigned_abs(), convention.grouping),
                convention.decimal,
                amount.cents_part()
            ),
        )
    };

    let sign = if negative { "-" } else { "" };
    match convention.placement {
        Placement::Prefix => format!("{}{}{}", sign, convention.symbol, number),
        Placement::PrefixSpaced => format!("{}{} {}", sign, convention.symbol, number),
        Placement::SuffixSpaced => format!("{}{} {}", sign, number, convention.symbol),
    }
}

/// `1234567` -> `1,234,567`
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(cents: i64, code: &str) -> String {
        format_money(Money::from_cents(cents), &CurrencyCode::new(code))
    }

    #[test]
    fn test_known_currencies() {
        assert_eq!(fmt(123456, "USD"), "$1,234.56");
        assert_eq!(fmt(123456, "EUR"), "1.234,56 €");
        assert_eq!(fmt(123456, "GBP"), "£1,234.56");
        assert_eq!(fmt(123456, "JPY"), "￥1,235");
        assert_eq!(fmt(123456, "CNY"), "¥1,234.56");
        assert_eq!(fmt(123456, "VND"), "1.235 ₫");
        assert_eq!(fmt(123456, "ZWL"), "ZWL 1,234.56");
    }

    #[test]
    fn test_small_and_negative() {
        assert_eq!(fmt(5, "USD"), "$0.05");
        assert_eq!(fmt(0, "USD"), "$0.00");
        assert_eq!(fmt(-5000, "USD"), "-$50.00");
        assert_eq!(fmt(-123456, "EUR"), "-1.234,56 €");
        assert_eq!(fmt(-40, "JPY"), "￥0");
        assert_eq!(fmt(-50, "JPY"), "-￥1");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(fmt(123456, "CHF"), "CHF 1,234.56");
        assert_eq!(fmt(1250, "usd"), "12.50 usd");
        assert_eq!(fmt(1250, "DOLLARS"), "12.50 DOLLARS");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(1234567, '.'), "1.234.567");
    }
}
