//! Lenient text to number coercion.

/// Coerces free-form text to a number, falling back to `0.0`.
///
/// Leading whitespace is skipped and the longest prefix that forms a
/// decimal number is parsed, so `"12abc"` is `12.0` and `"1e3x"` is
/// `1000.0`. `"Infinity"` (optionally signed) parses to infinity. Text with
/// no numeric prefix becomes `0.0`, as does anything that would be NaN or
/// negative zero.
#[must_use]
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let value = numeric_prefix(trimmed)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_nan() || value == 0.0 { 0.0 } else { value }
}

/// Returns the longest prefix of `s` that is a valid float literal.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(&s[..end + "Infinity".len()]);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // A bare "." with no digits on either side is not a number.
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(coerce_number("300"), 300.0);
        assert_eq!(coerce_number("0.20"), 0.2);
        assert_eq!(coerce_number("-4.5"), -4.5);
        assert_eq!(coerce_number("  42"), 42.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert_eq!(coerce_number("12abc"), 12.0);
        assert_eq!(coerce_number("1e3x"), 1000.0);
        assert_eq!(coerce_number("2e"), 2.0);
        assert_eq!(coerce_number("7e+"), 7.0);
        assert_eq!(coerce_number("3.25 MB"), 3.25);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("."), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("$300"), 0.0);
        assert!(coerce_number("-0").is_sign_positive());
    }

    #[test]
    fn test_infinity() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(coerce_number("inf"), 0.0);
    }
}
