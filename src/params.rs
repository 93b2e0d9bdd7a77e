//! Query-parameter serialization.
//!
//! List-style operations accept an arbitrary JSON object of parameters which
//! is flattened into a percent-encoded query string. Scalar values are
//! rendered bare (`count=10`, not `count="10"`); nested values fall back to
//! compact JSON.

use serde_json::Value;

/// Serialize a JSON object into a query string.
///
/// Returns `None` for a missing, non-object, or empty parameter set so the
/// caller can omit the query string entirely. Key order is deterministic
/// (serde_json maps iterate in key order).
pub fn serialize_params(params: &Value) -> Option<String> {
    let object = params.as_object()?;
    if object.is_empty() {
        return None;
    }

    let pairs: Vec<String> = object
        .iter()
        .map(|(key, value)| {
            let rendered = render_value(value);
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&rendered)
            )
        })
        .collect();

    Some(pairs.join("&"))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_none() {
        assert_eq!(serialize_params(&json!({})), None);
    }

    #[test]
    fn test_non_object_is_none() {
        assert_eq!(serialize_params(&Value::Null), None);
        assert_eq!(serialize_params(&json!("count=1")), None);
    }

    #[test]
    fn test_scalars_render_bare() {
        let query = serialize_params(&json!({"a": 1, "b": 2})).unwrap();
        assert!(query.contains("a=1"));
        assert!(query.contains("b=2"));
        assert_eq!(query.matches('&').count(), 1);
    }

    #[test]
    fn test_string_values_are_encoded() {
        let query = serialize_params(&json!({"query": "name eq \"demo user\""})).unwrap();
        assert!(query.starts_with("query="));
        assert!(!query.contains(' '));
        assert!(!query.contains('"'));
    }

    #[test]
    fn test_bool_and_null_values() {
        let query = serialize_params(&json!({"active": true, "cursor": null})).unwrap();
        assert!(query.contains("active=true"));
        assert!(query.contains("cursor="));
    }

    #[test]
    fn test_nested_value_renders_as_json() {
        let query = serialize_params(&json!({"sort": {"field": "email"}})).unwrap();
        let decoded = urlencoding::decode(query.strip_prefix("sort=").unwrap()).unwrap();
        assert_eq!(decoded, r#"{"field":"email"}"#);
    }

    proptest! {
        // Pair count always matches the number of keys.
        #[test]
        fn prop_pair_count_matches_keys(
            entries in proptest::collection::btree_map("[a-z]{1,8}", 0i64..10_000, 1..8)
        ) {
            let object: serde_json::Map<String, Value> = entries
                .iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();
            let query = serialize_params(&Value::Object(object)).unwrap();
            prop_assert_eq!(query.split('&').count(), entries.len());
        }

        // Every key/value pair round-trips through the query string.
        #[test]
        fn prop_pairs_survive_serialization(
            entries in proptest::collection::btree_map("[a-z]{1,8}", 0i64..10_000, 1..8)
        ) {
            let object: serde_json::Map<String, Value> = entries
                .iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();
            let query = serialize_params(&Value::Object(object)).unwrap();
            for (key, value) in &entries {
                let expected = format!("{key}={value}");
                prop_assert!(query.split('&').any(|pair| pair == expected));
            }
        }
    }
}
