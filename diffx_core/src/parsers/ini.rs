use indexmap::IndexMap;

use diffx_value::{DiffError, Value};

const ROOT_SECTION: &str = "__root__";

/// Parse an INI document into a [`Value`] (spec §4.7). Sections become
/// top-level `Mapping` entries; every value is a `String`. Bare `key =
/// value` pairs appearing before any `[section]` header are collected
/// under the reserved `"__root__"` key. A duplicate key within the same
/// section is a parse error naming the section, key, and line
/// (SPEC_FULL.md §4.7) — this crate has no generic INI dependency in its
/// stack, so the format is small enough to hand-roll faithfully.
pub fn parse_ini(content: &str) -> Result<Value, DiffError> {
    let mut sections: IndexMap<String, IndexMap<String, Value>> = IndexMap::new();
    let mut current = ROOT_SECTION.to_string();

    for (line_number, raw_line) in content.lines().enumerate() {
        let line_number = line_number + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = section_header(line) {
            current = name.to_string();
            sections.entry(current.clone()).or_default();
            continue;
        }

        let (key, value) = split_key_value(line).ok_or_else(|| {
            DiffError::parse(
                "ini",
                format!("line {line_number}: expected `key = value`, found `{line}`"),
            )
        })?;

        let section = sections.entry(current.clone()).or_default();
        if section.contains_key(&key) {
            return Err(DiffError::parse(
                "ini",
                format!("line {line_number}: duplicate key `{key}` in section `{current}`"),
            ));
        }
        section.insert(key, Value::String(value));
    }

    let mut root = IndexMap::with_capacity(sections.len());
    for (name, entries) in sections {
        root.insert(name, Value::Mapping(entries));
    }
    Ok(Value::Mapping(root))
}

fn strip_comment(line: &str) -> &str {
    let comment_at = line
        .char_indices()
        .find(|(_, c)| *c == ';' || *c == '#')
        .map(|(i, _)| i);
    match comment_at {
        Some(i) => &line[..i],
        None => line,
    }
}

fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(|name| name.trim())
}

fn split_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}
