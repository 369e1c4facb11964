use indexmap::IndexMap;

use diffx_value::{DiffError, Value};

/// Parse a YAML document into a [`Value`] (spec §4.7), under the YAML 1.1
/// core schema: plain `true`/`false`/`null` recognised, untagged scalars
/// typed by value. Mapping keys that are not strings in the source (e.g.
/// numeric or boolean keys) are rendered to their canonical string form,
/// since `Value::Mapping` requires `String` keys (SPEC_FULL.md §4.7).
pub fn parse_yaml(content: &str) -> Result<Value, DiffError> {
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|err| DiffError::parse("yaml", err))?;
    Ok(convert(parsed))
}

fn convert(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if n.is_i64() {
                Value::Integer(n.as_i64().unwrap())
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Sequence(items.into_iter().map(convert).collect())
        }
        serde_yaml::Value::Mapping(entries) => {
            let mut mapping = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                mapping.insert(scalar_key_to_string(key), convert(value));
            }
            Value::Mapping(mapping)
        }
        serde_yaml::Value::Tagged(tagged) => convert(tagged.value),
    }
}

fn scalar_key_to_string(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .unwrap_or_default()
            .trim()
            .to_string(),
    }
}
