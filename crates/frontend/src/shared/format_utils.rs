//! Number formatting for tables and summary cards.
//!
//! Every formatter is total: missing or non-finite input falls back to the
//! documented zero string instead of panicking.

/// Formats a number with a thousands separator (space) and the given number
/// of decimal places. Missing/NaN input renders as "0".
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_number(Some(1234.567), 2), "1 234.57");
/// ```
pub fn format_number(value: Option<f64>, decimals: u8) -> String {
    let value = match value.filter(|v| v.is_finite()) {
        Some(v) => v,
        None => return "0".to_string(),
    };
    group_thousands(value, decimals)
}

/// Formats a monetary value: "$1 234.56". Missing/NaN input renders as the
/// canonical zero string "$0.00".
pub fn format_currency(value: Option<f64>) -> String {
    format_currency_in(value, "USD")
}

/// [`format_currency`] with an explicit currency code.
pub fn format_currency_in(value: Option<f64>, currency: &str) -> String {
    let value = match value.filter(|v| v.is_finite()) {
        Some(v) => v,
        None => return "$0.00".to_string(),
    };
    let amount = group_thousands(value, 2);
    match currency {
        "USD" => format!("${}", amount),
        "EUR" => format!("€{}", amount),
        other => format!("{} {}", other, amount),
    }
}

/// Formats a fractional value as a percentage: 0.05 → "5.00%".
/// Missing/NaN input renders as "0%".
pub fn format_percentage(value: Option<f64>, decimals: u8) -> String {
    let value = match value.filter(|v| v.is_finite()) {
        Some(v) => v,
        None => return "0%".to_string(),
    };
    format!("{}%", group_thousands(value * 100.0, decimals))
}

fn group_thousands(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.split('.');
    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next();

    // Insert a space every 3 digits, walking the integer part from the end.
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let integer_grouped = grouped.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", integer_grouped, d),
        None => integer_grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(1234.56)), "$1 234.56");
        assert_eq!(format_currency(Some(1234567.891)), "$1 234 567.89");
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(-1234.5)), "$-1 234.50");
    }

    #[test]
    fn test_format_currency_invalid_input_is_zero_string() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_currency(Some(f64::NAN)), "$0.00");
        assert_eq!(format_currency(Some(f64::INFINITY)), "$0.00");
    }

    #[test]
    fn test_format_currency_in_other_currencies() {
        assert_eq!(format_currency_in(Some(10.0), "EUR"), "€10.00");
        assert_eq!(format_currency_in(Some(10.0), "MXN"), "MXN 10.00");
        assert_eq!(format_currency_in(None, "EUR"), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(0.05), 2), "5.00%");
        assert_eq!(format_percentage(Some(0.1), 0), "10%");
        assert_eq!(format_percentage(Some(1.0), 2), "100.00%");
    }

    #[test]
    fn test_format_percentage_invalid_input() {
        assert_eq!(format_percentage(None, 2), "0%");
        assert_eq!(format_percentage(Some(f64::NAN), 2), "0%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(1234.567), 0), "1 235");
        assert_eq!(format_number(Some(1234.567), 1), "1 234.6");
        assert_eq!(format_number(Some(1234.567), 3), "1 234.567");
        assert_eq!(format_number(Some(-1234.0), 0), "-1 234");
        assert_eq!(format_number(None, 2), "0");
    }
}
