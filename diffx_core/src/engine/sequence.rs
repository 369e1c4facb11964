//! Identity-keyed sequence alignment (spec §4.3, keyed regime).
//!
//! Turns reordered or partially overlapping arrays of records into minimal,
//! meaningful edits instead of position-wise churn, by aligning elements
//! through a caller-chosen id field rather than by position.

use indexmap::IndexMap;

use diffx_value::Value;

use super::Child;

/// Render a scalar [`Value`] to the textual form used in an `IdTag` path
/// segment and as the bucketing key for keyed alignment. Returns `None` for
/// non-scalar values, which disqualifies an element from the keyed
/// partition (spec §4.3: "value a scalar").
fn scalar_id_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// One side's partition of a sequence into keyed and unkeyed elements
/// (spec §4.3).
struct Partition<'a> {
    /// First-occurrence order preserved; a later duplicate id is pushed
    /// into `unkeyed` instead of overwriting the map.
    keyed: IndexMap<String, &'a Value>,
    unkeyed: Vec<&'a Value>,
}

fn partition<'a>(elements: &'a [Value], id_key: &str) -> Partition<'a> {
    let mut keyed = IndexMap::new();
    let mut unkeyed = Vec::new();

    for element in elements {
        let candidate = element
            .as_mapping()
            .and_then(|m| m.get(id_key))
            .and_then(scalar_id_text);

        match candidate {
            Some(id) if !keyed.contains_key(&id) => {
                keyed.insert(id, element);
            }
            _ => unkeyed.push(element),
        }
    }

    Partition { keyed, unkeyed }
}

/// Build the ordered list of per-element comparisons for the keyed regime:
/// the id-union pass first (ids(a) ∪ ids(b)\ids(a)), then a positional
/// fallback over each side's unkeyed leftovers.
pub(super) fn align<'a>(a: &'a [Value], b: &'a [Value], id_key: &str) -> Vec<Child<'a>> {
    let a_side = partition(a, id_key);
    let b_side = partition(b, id_key);

    let mut children = Vec::new();

    for (id, a_value) in &a_side.keyed {
        match b_side.keyed.get(id) {
            Some(b_value) => children.push(Child::recurse_id_tag(id_key, id, *a_value, *b_value)),
            None => children.push(Child::removed_id_tag(id_key, id, *a_value)),
        }
    }
    for (id, b_value) in &b_side.keyed {
        if !a_side.keyed.contains_key(id) {
            children.push(Child::added_id_tag(id_key, id, *b_value));
        }
    }

    children.extend(align_unkeyed(&a_side.unkeyed, &b_side.unkeyed));

    children
}

/// Positional fallback over each side's unkeyed leftovers (spec §4.3).
/// Mirrors [`super::positional::align`], but operates on the `&Value`
/// references a [`Partition`] already holds rather than a plain `&[Value]`
/// slice, since the unkeyed elements are a filtered subset, not a
/// contiguous run of the original sequence.
fn align_unkeyed<'a>(a: &[&'a Value], b: &[&'a Value]) -> Vec<Child<'a>> {
    let mut children = Vec::new();
    let common = a.len().min(b.len());

    for i in 0..common {
        children.push(Child::recurse_index(i, a[i], b[i]));
    }
    for (i, value) in a.iter().enumerate().skip(common) {
        children.push(Child::removed_index(i, *value));
    }
    for (i, value) in b.iter().enumerate().skip(common) {
        children.push(Child::added_index(i, *value));
    }

    children
}
