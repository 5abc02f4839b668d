//! Prioritized key lookup over loosely-shaped JSON objects.
//!
//! Uploaded spreadsheets and partner feeds rarely agree on field names:
//! `"price"`, `"Unit Price"`, `"unit_price"` and `"售价"` can all mean the
//! same thing. [`resolve_field`] takes an ordered list of acceptable names
//! and returns the first usable value, first by exact key and then by a
//! punctuation- and case-insensitive comparison.

use serde_json::{Map, Value};

/// An arbitrary decoded JSON object whose shape is not known in advance.
///
/// Keys keep their source order (serde_json's `preserve_order` feature),
/// which the fuzzy pass of [`resolve_field`] relies on.
pub type RawRecord = Map<String, Value>;

/// Returns the value of the first candidate key present in `raw`.
///
/// `null` and `""` count as absent. Candidates are tried in order by exact
/// key first; only when none matches are keys compared through
/// [`normalize_key`], in which case the first entry of `raw` (in stored
/// order) whose normalized key equals any normalized candidate wins.
///
/// A missing mapping resolves nothing.
#[must_use]
pub fn resolve_field<'a>(raw: Option<&'a RawRecord>, candidates: &[&str]) -> Option<&'a Value> {
    let raw = raw?;

    let exact = candidates
        .iter()
        .find_map(|key| raw.get(*key).filter(|value| is_present(value)));
    if exact.is_some() {
        return exact;
    }

    let wanted: Vec<String> = candidates
        .iter()
        .map(|key| normalize_key(key))
        .filter(|key| !key.is_empty())
        .collect();
    if wanted.is_empty() {
        return None;
    }

    raw.iter()
        .filter(|(_, value)| is_present(value))
        .find(|(key, _)| {
            let normalized = normalize_key(key);
            !normalized.is_empty() && wanted.contains(&normalized)
        })
        .map(|(_, value)| value)
}

/// Lowercases `key` and drops everything except ASCII letters, ASCII digits
/// and CJK ideographs.
///
/// `"Unit Price ($)"`, `"unit_price"` and `"UNIT-PRICE"` all become
/// `"unitprice"`; `"SKU 编码"` becomes `"sku编码"`.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_cjk_ideograph(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2A6DF}'
    )
}
