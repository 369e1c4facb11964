//! Renders a difference list as text (spec §4.6). Every formatter here is a
//! pure function over `&[Difference]`; none of them reorder the list.

use diffx_value::{DiffError, Value};

use crate::model::Difference;
use crate::options::OutputFormat;

/// Render `results` per `format` (spec §4.6). `context_lines` and
/// `show_unchanged` only affect the `unified` formatter's context window;
/// the other three render every record they are given, in order.
pub fn format_output(
    results: &[Difference],
    format: OutputFormat,
    context_lines: usize,
) -> Result<String, DiffError> {
    match format {
        OutputFormat::Diffx => Ok(format_diffx(results)),
        OutputFormat::Json => format_json(results),
        OutputFormat::Yaml => format_yaml(results),
        OutputFormat::Unified => Ok(format_unified(results, context_lines)),
    }
}

fn format_diffx(results: &[Difference]) -> String {
    let mut out = String::new();
    for difference in results {
        out.push_str(&diffx_line(difference));
        out.push('\n');
    }
    out
}

fn diffx_line(difference: &Difference) -> String {
    match difference {
        Difference::Added { path, value, .. } => {
            format!("+ {}: {}", path, render_scalar(value))
        }
        Difference::Removed { path, value, .. } => {
            format!("- {}: {}", path, render_scalar(value))
        }
        Difference::Modified {
            path,
            old_value,
            new_value,
            ..
        } => format!(
            "~ {}: {} → {}",
            path,
            render_scalar(old_value),
            render_scalar(new_value)
        ),
        Difference::TypeChanged {
            path,
            old_value,
            new_value,
            ..
        } => format!(
            "! {}: {} → {}",
            path,
            render_scalar(old_value),
            render_scalar(new_value)
        ),
        Difference::Unchanged { path, value, .. } => {
            format!("  {}: {}", path, render_scalar(value))
        }
    }
}

/// Compact single-line rendering of a value for the `diffx` formatter.
/// Containers fall back to their JSON form; scalars render plainly.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) | Value::Mapping(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| "<unrenderable>".to_string())
        }
    }
}

fn format_json(results: &[Difference]) -> Result<String, DiffError> {
    let wire: Vec<_> = results.iter().map(Difference::to_wire).collect();
    serde_json::to_string_pretty(&wire)
        .map_err(|err| DiffError::parse("json", format!("failed to render output: {err}")))
}

fn format_yaml(results: &[Difference]) -> Result<String, DiffError> {
    let wire: Vec<_> = results.iter().map(Difference::to_wire).collect();
    serde_yaml::to_string(&wire)
        .map_err(|err| DiffError::parse("yaml", format!("failed to render output: {err}")))
}

/// Unified-diff-style rendering, grouped by the difference's top-level path
/// segment (spec §4.6). `context_lines` of surrounding `Unchanged` records
/// sharing the same group are included around each change; if the engine
/// was not run with `show_unchanged`, no `Unchanged` records exist to draw
/// context from, so the context window is always empty in that case.
fn format_unified(results: &[Difference], context_lines: usize) -> String {
    let mut out = String::new();
    let mut current_group: Option<String> = None;

    for (index, difference) in results.iter().enumerate() {
        let group = top_level_segment(difference);
        if current_group.as_deref() != Some(group.as_str()) {
            if current_group.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("@@ {group} @@\n"));
            current_group = Some(group);
        }

        if let Difference::Unchanged { .. } = difference {
            if !is_within_context(results, index, context_lines) {
                continue;
            }
        }

        out.push_str(&unified_line(difference));
        out.push('\n');
    }

    out
}

fn is_within_context(results: &[Difference], index: usize, context_lines: usize) -> bool {
    if context_lines == 0 {
        return false;
    }
    results[index.saturating_sub(context_lines)..(index + context_lines + 1).min(results.len())]
        .iter()
        .any(|d| !matches!(d, Difference::Unchanged { .. }))
}

fn unified_line(difference: &Difference) -> String {
    match difference {
        Difference::Unchanged { path, value, .. } => {
            format!("  {}: {}", path, render_scalar(value))
        }
        other => diffx_line(other),
    }
}

fn top_level_segment(difference: &Difference) -> String {
    let path = difference.path();
    match path.0.first() {
        Some(diffx_value::Segment::Key(name)) => name.clone(),
        Some(diffx_value::Segment::Index(i)) => format!("[{i}]"),
        Some(diffx_value::Segment::IdTag { key, value }) => format!("[{key}={value}]"),
        None => "<root>".to_string(),
    }
}
