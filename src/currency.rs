//! Number formatting for human-readable insight copy.
//!
//! Amounts are rendered in the Brazilian-real convention used by the app:
//! "R$ 1.000,00", with "." grouping thousands and "," marking decimals.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Formats a monetary amount as a Brazilian-real string, e.g. "R$ 1.234,56".
///
/// Negative amounts render as "-R$ 1.234,56".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "R$ 0,00".to_owned();
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    // numfmt writes en-US separators; swap them for the pt-BR convention.
    formatted_string
        .chars()
        .map(|character| match character {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect()
}

/// Formats a percentage value, avoiding "-0%" display.
pub(crate) fn format_percentage(value: f64) -> String {
    let rounded = value.round();
    if rounded.abs() < 0.5 {
        "0".to_string()
    } else {
        format!("{:.0}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_percentage};

    #[test]
    fn formats_thousands_with_dot_and_decimals_with_comma() {
        assert_eq!(format_currency(1000.0), "R$ 1.000,00");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
    }

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_currency(12.3), "R$ 12,30");
        assert_eq!(format_currency(0.5), "R$ 0,50");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-1234.56), "-R$ 1.234,56");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn format_percentage_avoids_negative_zero() {
        assert_eq!(format_percentage(0.0), "0");
        assert_eq!(format_percentage(-0.4), "0");
        assert_eq!(format_percentage(0.4), "0");
        assert_eq!(format_percentage(95.0), "95");
        assert_eq!(format_percentage(-5.0), "-5");
    }
}
