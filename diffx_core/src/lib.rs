//! Semantic diff engine, normalizer, formatter, and format parsers for
//! structured data (SPEC_FULL.md). Built on [`diffx_value`]'s `Value`,
//! `Path`, and `DiffError` types; this crate adds everything that turns
//! those primitives into the comparison system: the recursive walk, the
//! option resolver, the four output formatters, and the six format
//! parsers.
//!
//! # Example
//!
//! ```rust
//! use diffx_core::{diff, DiffOptions};
//! use diffx_value::Value;
//! use indexmap::IndexMap;
//!
//! let mut old = IndexMap::new();
//! old.insert("age".to_string(), Value::Integer(30));
//! let mut new = old.clone();
//! new.insert("age".to_string(), Value::Integer(31));
//!
//! let results = diff(
//!     &Value::Mapping(old),
//!     &Value::Mapping(new),
//!     &DiffOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(results.len(), 1);
//! ```

mod engine;
mod format;
mod model;
mod normalize;
mod options;
mod parsers;

use std::path::Path as FsPath;

pub use diffx_value::{DiffError, Path, Segment, Value, ValueKind};
pub use model::Difference;
pub use options::{parse_output_format, DiffOptions, OutputFormat};
pub use parsers::{parse_csv, parse_ini, parse_json, parse_toml, parse_xml, parse_yaml};

/// Compare `old` and `new`, producing the ordered difference list (spec
/// §4.1). The only failure mode is option validation — an invalid
/// `ignore_keys_regex`; the walk itself is total on well-formed `Value`
/// inputs.
pub fn diff(old: &Value, new: &Value, options: &DiffOptions) -> Result<Vec<Difference>, DiffError> {
    let resolved = options.resolve()?;
    let mut results = engine::walk(old, new, &resolved);

    if let Some(filter) = &options.path_filter {
        results.retain(|difference| difference.path().render().contains(filter.as_str()));
    }

    Ok(results)
}

/// Read both files, dispatch to a parser by extension, and diff the
/// results (spec §6). Unknown extensions fall back to JSON; if that also
/// fails, the original `DiffError::UnsupportedExtension` is returned.
pub fn diff_files(
    path1: &FsPath,
    path2: &FsPath,
    options: &DiffOptions,
) -> Result<Vec<Difference>, DiffError> {
    let content1 = read_file(path1)?;
    let content2 = read_file(path2)?;

    let format = parser_for_extension(path1);
    let old = parse_with_fallback(&content1, format, path1)?;
    let new = parse_with_fallback(&content2, format, path2)?;

    diff(&old, &new, options)
}

/// Parse both strings with the named parser, then diff them (spec §6).
pub fn diff_strings(
    content1: &str,
    content2: &str,
    format: &str,
    options: &DiffOptions,
) -> Result<Vec<Difference>, DiffError> {
    let old = parse_by_name(content1, format)?;
    let new = parse_by_name(content2, format)?;
    diff(&old, &new, options)
}

/// Render `results` in `format` (spec §4.6, §6). `context_lines` is always
/// 0 through this entry point, matching the documented two-argument
/// contract; callers that need unified-diff context should drive
/// [`format_output_with_options`] instead.
pub fn format_output(results: &[Difference], format: &str) -> Result<String, DiffError> {
    let output_format = parse_output_format(format)?;
    format::format_output(results, output_format, 0)
}

/// Render `results` using the full option set, so `context_lines` reaches
/// the unified formatter (spec §4.6). Not part of the minimal external
/// contract in spec §6, but needed by any host — such as `diffx_cli` —
/// that already holds a `DiffOptions`.
pub fn format_output_with_options(
    results: &[Difference],
    options: &DiffOptions,
) -> Result<String, DiffError> {
    format::format_output(results, options.output_format, options.context_lines)
}

fn read_file(path: &FsPath) -> Result<String, DiffError> {
    std::fs::read_to_string(path).map_err(|err| DiffError::io(path.display(), err))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
    Toml,
    Ini,
    Xml,
    Csv,
}

fn parser_for_extension(path: &FsPath) -> Option<FileFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "json" => Some(FileFormat::Json),
        "yaml" | "yml" => Some(FileFormat::Yaml),
        "toml" => Some(FileFormat::Toml),
        "ini" | "cfg" => Some(FileFormat::Ini),
        "xml" => Some(FileFormat::Xml),
        "csv" => Some(FileFormat::Csv),
        _ => None,
    }
}

fn parse_with_fallback(
    content: &str,
    format: Option<FileFormat>,
    path: &FsPath,
) -> Result<Value, DiffError> {
    match format {
        Some(format) => parse_by_format(content, format),
        None => parse_json(content).map_err(|_| DiffError::unsupported_extension(path.display())),
    }
}

fn parse_by_format(content: &str, format: FileFormat) -> Result<Value, DiffError> {
    match format {
        FileFormat::Json => parse_json(content),
        FileFormat::Yaml => parse_yaml(content),
        FileFormat::Toml => parse_toml(content),
        FileFormat::Ini => parse_ini(content),
        FileFormat::Xml => parse_xml(content),
        FileFormat::Csv => parse_csv(content),
    }
}

fn parse_by_name(content: &str, format: &str) -> Result<Value, DiffError> {
    match format {
        "json" => parse_json(content),
        "yaml" | "yml" => parse_yaml(content),
        "toml" => parse_toml(content),
        "ini" | "cfg" => parse_ini(content),
        "xml" => parse_xml(content),
        "csv" => parse_csv(content),
        other => Err(DiffError::config(format!("unknown parser format `{other}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn mapping(pairs: &[(&str, Value)]) -> Value {
        let mut map = IndexMap::new();
        for (key, value) in pairs {
            map.insert(key.to_string(), value.clone());
        }
        Value::Mapping(map)
    }

    #[test]
    fn s1_scalar_modify() {
        let old = mapping(&[("age", Value::Integer(30))]);
        let new = mapping(&[("age", Value::Integer(31))]);
        let results = diff(&old, &new, &DiffOptions::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Difference::Modified { .. }));
        assert_eq!(results[0].path().render(), "age");
    }

    #[test]
    fn s2_type_change() {
        let old = mapping(&[("value", Value::Integer(123))]);
        let new = mapping(&[("value", Value::String("123".to_string()))]);
        let results = diff(&old, &new, &DiffOptions::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Difference::TypeChanged { .. }));
    }

    #[test]
    fn s3_epsilon_tolerance() {
        let old = mapping(&[("v", Value::Float(1.0))]);
        let new = mapping(&[("v", Value::Float(1.001))]);

        let tolerant = DiffOptions::default().with_epsilon(0.01);
        assert!(diff(&old, &new, &tolerant).unwrap().is_empty());

        let strict = DiffOptions::default().with_epsilon(0.0001);
        assert_eq!(diff(&old, &new, &strict).unwrap().len(), 1);
    }

    #[test]
    fn s4_keyed_sequence_alignment() {
        fn record(id: i64, name: &str) -> Value {
            mapping(&[("id", Value::Integer(id)), ("n", Value::String(name.to_string()))])
        }

        let old = Value::Sequence(vec![record(1, "A"), record(2, "B")]);
        let new = Value::Sequence(vec![record(2, "B"), record(1, "A2")]);

        let options = DiffOptions::default().with_array_id_key("id");
        let results = diff(&old, &new, &options).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path().render(), "[id=1].n");
    }

    #[test]
    fn s5_added_removed_with_regex_filter() {
        let old = mapping(&[
            ("data", Value::String("x".to_string())),
            ("debug_a", Value::Integer(1)),
        ]);
        let new = mapping(&[
            ("data", Value::String("y".to_string())),
            ("debug_a", Value::Integer(2)),
        ]);

        let options = DiffOptions::default().with_ignore_keys_regex("^debug_");
        let results = diff(&old, &new, &options).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path().render(), "data");
    }

    #[test]
    fn s6_path_filter() {
        let old = mapping(&[
            ("a", mapping(&[("v", Value::Integer(1))])),
            ("b", mapping(&[("v", Value::Integer(1))])),
        ]);
        let new = mapping(&[
            ("a", mapping(&[("v", Value::Integer(2))])),
            ("b", mapping(&[("v", Value::Integer(2))])),
        ]);

        let options = DiffOptions::default().with_path_filter("a.");
        let results = diff(&old, &new, &options).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path().render(), "a.v");
    }

    #[test]
    fn reflexivity_on_a_nested_value() {
        let value = mapping(&[
            ("a", Value::Integer(1)),
            ("b", Value::Sequence(vec![Value::String("x".to_string())])),
        ]);
        assert!(diff(&value, &value, &DiffOptions::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn format_output_renders_diffx_lines() {
        let old = mapping(&[("age", Value::Integer(30))]);
        let new = mapping(&[("age", Value::Integer(31))]);
        let results = diff(&old, &new, &DiffOptions::default()).unwrap();
        let rendered = format_output(&results, "diffx").unwrap();
        assert_eq!(rendered.trim(), "~ age: 30 → 31");
    }

    #[test]
    fn unknown_output_format_is_a_config_error() {
        assert!(format_output(&[], "markdown").is_err());
    }
}
