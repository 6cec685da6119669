//! Lenient readers for loosely-typed upstream JSON.
//!
//! The upstream feeds change shape between versions: numbers show up as
//! strings, objects move under new keys, and fields disappear. These helpers
//! never fail; they return `None` when a value cannot be read so the caller
//! can fall back to its own default.

use serde_json::Value;

/// Follow a key path through nested objects.
pub fn lookup_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(*key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Return the first path that resolves, along with the value found there.
pub fn first_present<'a, 'p>(
    value: &'a Value,
    paths: &[&'p [&'p str]],
) -> Option<(&'p [&'p str], &'a Value)> {
    paths
        .iter()
        .find_map(|path| lookup_path(value, path).map(|v| (*path, v)))
}

/// Read a finite number from a JSON number or a numeric string.
pub fn lenient_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Read an integer, accepting whole-valued floats and numeric strings.
pub fn lenient_i64(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = lenient_f64(value)?;
    (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

/// Read a non-empty trimmed string; numbers are rendered as text.
pub fn lenient_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}
