//! Small utility helpers for encoding, lenient JSON numbers, and text shaping.

use serde_json::Value;
use std::fmt::Write;

/// What: Escape text for the query string of a placeholder image URL.
///
/// Inputs:
/// - `input`: Text to escape.
///
/// Output:
/// - ASCII letters, digits and `-_.!~*'()` unchanged; every other byte as `%XX`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    input.bytes().fold(String::with_capacity(input.len()), |mut out, b| {
        if b.is_ascii_alphanumeric()
            || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
        {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
        out
    })
}

/// What: Read a JSON value as `f64` only when it is a JSON number.
///
/// Inputs:
/// - `v`: JSON value (any type).
///
/// Output:
/// - `Some(f64)` for finite numbers; `None` for strings, null, or anything else.
#[must_use]
pub fn strict_f64(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite())
}

/// What: Read a JSON value as `f64`, accepting numeric strings.
///
/// Inputs:
/// - `v`: JSON value (any type).
///
/// Output:
/// - `Some(f64)` for finite numbers or strings whose leading token parses as a number.
///
/// Details:
/// - Strings are trimmed and a leading `$` is ignored, so `"$12.50"` and `" 12.5 "` both parse.
/// - Zero is returned as `Some(0.0)`; callers decide whether zero counts as "present".
#[must_use]
pub fn lenient_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(_) => strict_f64(v),
        Value::String(s) => s
            .trim()
            .trim_start_matches('$')
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse::<f64>().ok())
            .filter(|n| n.is_finite()),
        _ => None,
    }
}

/// What: Take at most `max` characters from `s` (not bytes).
///
/// Inputs:
/// - `s`: Source text.
/// - `max`: Character budget.
///
/// Output:
/// - Borrowed prefix containing at most `max` Unicode scalar values.
#[must_use]
pub fn take_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// What: Format a price as dollars with two decimals.
///
/// Inputs:
/// - `price`: Optional price value.
///
/// Output:
/// - `"$12.50"` style text; `"$0.00"` when the price is missing.
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    format!("${:.2}", price.unwrap_or(0.0))
}

/// What: Return the first whitespace-separated word of a display name.
///
/// Inputs:
/// - `name`: Full display name.
///
/// Output:
/// - First word, or the whole trimmed input when it has no whitespace.
#[must_use]
pub fn first_word(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or_else(|| name.trim())
}
