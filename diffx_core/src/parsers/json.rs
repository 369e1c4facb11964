use indexmap::IndexMap;

use diffx_value::{DiffError, Value};

/// Parse a JSON document into a [`Value`] (spec §4.7). Numbers with a
/// fractional part or exponent become `Float`; integers in signed 64-bit
/// range become `Integer`; integers outside that range become `Float`,
/// matching `serde_json`'s own number model (SPEC_FULL.md §4.7).
pub fn parse_json(content: &str) -> Result<Value, DiffError> {
    let parsed: serde_json::Value =
        serde_json::from_str(content).map_err(|err| DiffError::parse("json", err))?;
    Ok(convert(parsed))
}

fn convert(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Sequence(items.into_iter().map(convert).collect()),
        serde_json::Value::Object(entries) => {
            let mut mapping = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                mapping.insert(key, convert(value));
            }
            Value::Mapping(mapping)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_number_becomes_float() {
        let value = parse_json(r#"{"v": 1.5}"#).unwrap();
        assert_eq!(
            value.as_mapping().unwrap().get("v"),
            Some(&Value::Float(1.5))
        );
    }

    #[test]
    fn in_range_integer_stays_integer() {
        let value = parse_json(r#"{"v": 42}"#).unwrap();
        assert_eq!(
            value.as_mapping().unwrap().get("v"),
            Some(&Value::Integer(42))
        );
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        assert!(parse_json("{not json}").is_err());
    }
}
