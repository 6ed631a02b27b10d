//! Scalar formatting for report output.
//!
//! # Examples
//!
//! ```
//! use geoinfo_core::format::{format_count, format_number, format_string};
//!
//! assert_eq!(format_number(12.5), "12.5");
//! assert_eq!(format_string("line1\nline2"), r"'line1\nline2'");
//! assert_eq!(format_count(1_234_567), "1,234,567");
//! ```

use geoinfo_common::Value;

/// Shortest text that reads back as the same number.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
/// Magnitudes of at least `1e21` or below `1e-6` use exponent form with a
/// signed exponent (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => text,
        }
    } else {
        format!("{value}")
    }
}

/// Escape sequence for a character that is shown escaped in quoted strings.
#[must_use]
pub fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '\n' => Some(r"\n"),
        '\r' => Some(r"\r"),
        '\t' => Some(r"\t"),
        _ => None,
    }
}

/// Single-quotes a string for display.
///
/// Newlines, carriage returns and tabs become two-character escapes. Every
/// other control character is dropped.
#[must_use]
pub fn format_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if let Some(escaped) = escape_char(c) {
            out.push_str(escaped);
        } else if !c.is_control() {
            out.push(c);
        }
    }
    out.push('\'');
    out
}

/// Number of characters left of the decimal point in a number's display
/// text. Non-numbers count as zero.
#[must_use]
pub fn count_integral_chars(value: &Value) -> usize {
    match value {
        Value::Number(n) => {
            let text = format_number(*n);
            text.find('.').unwrap_or(text.len())
        },
        _ => 0,
    }
}

/// Renders a value for the attribute preview.
///
/// Numbers are left-padded so that their integral part fills
/// `integral_width` characters; other values are never padded.
#[must_use]
pub fn format_value(value: &Value, integral_width: usize) -> String {
    match value {
        Value::Number(n) => {
            let pad = integral_width.saturating_sub(count_integral_chars(value));
            format!("{}{}", " ".repeat(pad), format_number(*n))
        },
        Value::String(s) => format_string(s),
        Value::Struct(json) => json.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Formats a count with `,` thousands separators.
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_number_minimal_form() {
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_exponent_thresholds() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-2.5e300), "-2.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn test_count_integral_chars_exponent_form() {
        assert_eq!(count_integral_chars(&Value::Number(1e300)), 6);
        assert_eq!(count_integral_chars(&Value::Number(2.5e-9)), 1);
    }

    #[test]
    fn test_format_number_special_values() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_escape_char() {
        assert_eq!(escape_char('\n'), Some("\\n"));
        assert_eq!(escape_char('\r'), Some("\\r"));
        assert_eq!(escape_char('\t'), Some("\\t"));
        assert_eq!(escape_char('a'), None);
    }

    #[test]
    fn test_format_string_escapes() {
        assert_eq!(format_string("line1\nline2"), "'line1\\nline2'");
        assert_eq!(format_string("a\tb\r"), "'a\\tb\\r'");
        assert_eq!(format_string(""), "''");
    }

    #[test]
    fn test_format_string_strips_other_control_chars() {
        assert_eq!(format_string("a\u{0}b\u{7}c\u{1b}"), "'abc'");
        assert_eq!(format_string("café"), "'café'");
    }

    #[test]
    fn test_count_integral_chars() {
        assert_eq!(count_integral_chars(&Value::Number(3.0)), 1);
        assert_eq!(count_integral_chars(&Value::Number(12.5)), 2);
        assert_eq!(count_integral_chars(&Value::Number(-150.75)), 4);
        assert_eq!(count_integral_chars(&Value::Number(1000.0)), 4);
        assert_eq!(count_integral_chars(&Value::from("12.5")), 0);
    }

    #[test]
    fn test_format_value_variants() {
        assert_eq!(format_value(&Value::Number(3.0), 2), " 3");
        assert_eq!(format_value(&Value::Number(12.5), 2), "12.5");
        assert_eq!(format_value(&Value::Number(123.0), 2), "123");
        assert_eq!(format_value(&Value::from("A"), 4), "'A'");
        assert_eq!(format_value(&Value::Struct(json!({"a": [1, 2]})), 4), r#"{"a":[1,2]}"#);
        assert_eq!(format_value(&Value::Struct(json!([])), 0), "[]");
        assert_eq!(format_value(&Value::Bool(false), 3), "false");
        assert_eq!(format_value(&Value::Null, 3), "null");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
