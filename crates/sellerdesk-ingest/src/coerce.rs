//! Total conversions from resolved JSON values to typed record fields.
//!
//! Nothing here fails: unusable input becomes `0`, `None` or an empty list,
//! and the normalizer substitutes its defaults.

use serde_json::Value;

/// Characters stripped from numeric strings before parsing.
const AMOUNT_NOISE: [char; 6] = ['$', '¥', '￥', '€', '£', ','];

/// Delimiters accepted between items of a list packed into one string.
const LIST_DELIMITERS: [char; 6] = [',', '，', ';', '；', '、', '|'];

/// Coerces a resolved value to a finite number.
///
/// Strings lose currency symbols, thousands separators and surrounding
/// whitespace, then parse from their leading numeric prefix
/// (`"29.99 USD"` → `29.99`, `"1 2"` → `1`).
/// Absent, unparseable, boolean, array and object values yield `0.0`, as do
/// non-finite results.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_amount(s),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// [`coerce_number`] clamped at zero.
#[must_use]
pub fn coerce_non_negative(value: Option<&Value>) -> f64 {
    let n = coerce_number(value);
    if n > 0.0 {
        n
    } else {
        0.0
    }
}

/// Coerces a resolved value to a whole, non-negative count (truncating).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_count(value: Option<&Value>) -> u64 {
    // `as` saturates at u64::MAX for huge inputs.
    coerce_non_negative(value).trunc() as u64
}

/// Coerces a resolved value to trimmed, non-empty text.
///
/// Numbers and booleans render as their JSON text; arrays and objects have
/// no text form.
#[must_use]
pub fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerces a resolved value to a list of non-empty strings.
///
/// Arrays keep their scalar elements; a single string is split on common
/// ASCII and full-width delimiters (`"Amazon US, eBay"`).
#[must_use]
pub fn coerce_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(|v| coerce_text(Some(v))).collect(),
        Some(Value::String(s)) => s
            .split(LIST_DELIMITERS)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        other => coerce_text(other).into_iter().collect(),
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !AMOUNT_NOISE.contains(c)).collect();
    leading_number(cleaned.trim())?.parse::<f64>().ok()
}

/// Returns the longest prefix of `s` shaped like a decimal number:
/// optional sign, digits with at most one dot, optional exponent.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut digits = 0usize;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < len && bytes[i] == b'.' {
        i += 1;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Only consume an exponent when digits follow it.
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    Some(&s[..i])
}
