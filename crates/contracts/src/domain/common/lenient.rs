//! Tolerant readers for loosely shaped backend JSON.
//!
//! The public endpoints are not versioned and fields drift between
//! `{data: [...]}` envelopes, bare arrays, numbers and strings. These helpers
//! never fail; a missing or unexpected shape reads as "absent".

use serde_json::Value;

/// `response.data ?? response`
pub fn unwrap_envelope(value: &Value) -> &Value {
    match value.get("data") {
        Some(inner) if !inner.is_null() => inner,
        _ => value,
    }
}

/// Unwrap an envelope and read the payload as a list. Anything that is not
/// an array reads as empty.
pub fn unwrap_list(value: &Value) -> &[Value] {
    match unwrap_envelope(value) {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    }
}

/// Non-empty string field.
pub fn text_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Display text for a field that may arrive as a string or a number.
pub fn display_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// JavaScript-style truthiness, used where the site historically relied on
/// `if (x)` to tell an absent reference from a present one.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_and_bare_lists_read_the_same() {
        let bare = json!([{"id": 1}, {"id": 2}]);
        let wrapped = json!({"success": true, "data": [{"id": 1}, {"id": 2}]});
        assert_eq!(unwrap_list(&bare), unwrap_list(&wrapped));
    }

    #[test]
    fn null_data_falls_back_to_the_response_itself() {
        let v = json!({"data": null, "hero_subtitle": "x"});
        assert_eq!(unwrap_envelope(&v), &v);
        assert!(unwrap_list(&Value::Null).is_empty());
        assert!(unwrap_list(&json!({"data": {"not": "a list"}})).is_empty());
    }

    #[test]
    fn display_field_accepts_numbers() {
        let v = json!({"area": 15, "material": "MDF", "other": null});
        assert_eq!(display_field(&v, "area"), "15");
        assert_eq!(display_field(&v, "material"), "MDF");
        assert_eq!(display_field(&v, "other"), "");
    }

    #[test]
    fn truthiness_matches_the_legacy_checks() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!("3")));
    }
}
