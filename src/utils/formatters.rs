//! Display formatting helpers for dashboard rendering.

use regex::Regex;
use std::sync::LazyLock;

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

/// Formats a monetary amount as US dollars with two decimal places and
/// thousands separators, e.g. `1234567.5` becomes `$1,234,567.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Formats a 10-digit US phone number as `(555) 123-4567`.
///
/// Inputs that do not contain exactly ten digits are returned unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits = NON_DIGITS.replace_all(raw, "");
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        raw.to_string()
    }
}

/// Extracts up to two uppercase initials from a name, e.g. "Acme Supplies"
/// becomes "AS".
pub fn format_initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(9.5), "$9.50");
        assert_eq!(format_currency(1250.0), "$1,250.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-45.25), "-$45.25");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("(555) 123 4567"), "(555) 123-4567");
    }

    #[test]
    fn test_format_phone_passthrough() {
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_phone("+44 20 7946 0958"), "+44 20 7946 0958");
    }

    #[test]
    fn test_format_initials() {
        assert_eq!(format_initials("Acme Supplies"), "AS");
        assert_eq!(format_initials("globex"), "G");
        assert_eq!(format_initials("Initech Global Logistics"), "IG");
        assert_eq!(format_initials(""), "");
    }
}
