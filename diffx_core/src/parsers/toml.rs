use indexmap::IndexMap;

use diffx_value::{DiffError, Value};

/// Parse a TOML document into a [`Value`] (spec §4.7). Dates and times
/// (including mixed date-times, local dates, local times) render as
/// `String` in their TOML-canonical textual form (SPEC_FULL.md §4.7).
pub fn parse_toml(content: &str) -> Result<Value, DiffError> {
    let parsed: toml::Value =
        content.parse().map_err(|err: toml::de::Error| DiffError::parse("toml", err))?;
    Ok(convert(parsed))
}

fn convert(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(convert).collect()),
        toml::Value::Table(entries) => {
            let mut mapping = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                mapping.insert(key, convert(value));
            }
            Value::Mapping(mapping)
        }
    }
}
