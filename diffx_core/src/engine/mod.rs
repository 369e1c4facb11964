//! Recursive structural comparison (spec §4.2–§4.4): the heart of this
//! crate. `walk` dispatches on the pair of variants at each path, descends
//! into mappings and sequences, and defers sequence alignment to
//! [`positional`] or [`sequence`] depending on `array_id_key`.

mod positional;
mod sequence;

use diffx_value::{Path, Segment, Value, ValueKind};

use crate::model::Difference;
use crate::normalize::{floats_equivalent, strings_equivalent};
use crate::options::ResolvedOptions;

/// One pending child comparison or already-resolved leaf, produced by a
/// container's alignment pass and given a path segment by the caller.
pub(crate) struct Child<'a> {
    segment: Segment,
    kind: ChildKind<'a>,
}

enum ChildKind<'a> {
    Recurse(&'a Value, &'a Value),
    Added(&'a Value),
    Removed(&'a Value),
}

impl<'a> Child<'a> {
    fn recurse(segment: Segment, a: &'a Value, b: &'a Value) -> Self {
        Child {
            segment,
            kind: ChildKind::Recurse(a, b),
        }
    }

    fn added(segment: Segment, value: &'a Value) -> Self {
        Child {
            segment,
            kind: ChildKind::Added(value),
        }
    }

    fn removed(segment: Segment, value: &'a Value) -> Self {
        Child {
            segment,
            kind: ChildKind::Removed(value),
        }
    }

    fn recurse_key(key: impl Into<String>, a: &'a Value, b: &'a Value) -> Self {
        Self::recurse(Segment::Key(key.into()), a, b)
    }
    fn added_key(key: impl Into<String>, value: &'a Value) -> Self {
        Self::added(Segment::Key(key.into()), value)
    }
    fn removed_key(key: impl Into<String>, value: &'a Value) -> Self {
        Self::removed(Segment::Key(key.into()), value)
    }

    fn recurse_index(index: usize, a: &'a Value, b: &'a Value) -> Self {
        Self::recurse(Segment::Index(index), a, b)
    }
    fn added_index(index: usize, value: &'a Value) -> Self {
        Self::added(Segment::Index(index), value)
    }
    fn removed_index(index: usize, value: &'a Value) -> Self {
        Self::removed(Segment::Index(index), value)
    }

    fn recurse_id_tag(key: &str, value: &str, a: &'a Value, b: &'a Value) -> Self {
        Self::recurse(
            Segment::IdTag {
                key: key.to_string(),
                value: value.to_string(),
            },
            a,
            b,
        )
    }
    fn added_id_tag(key: &str, value: &str, v: &'a Value) -> Self {
        Self::added(
            Segment::IdTag {
                key: key.to_string(),
                value: value.to_string(),
            },
            v,
        )
    }
    fn removed_id_tag(key: &str, value: &str, v: &'a Value) -> Self {
        Self::removed(
            Segment::IdTag {
                key: key.to_string(),
                value: value.to_string(),
            },
            v,
        )
    }
}

/// Unit of work for the explicit-stack walk. `Compare` may, on processing,
/// push further `Task`s; `Leaf` is an already-resolved difference ready to
/// be appended to the output in traversal order.
enum Task<'a> {
    Compare(Path, &'a Value, &'a Value),
    Leaf(Difference),
}

/// Walk `old` and `new`, producing the ordered difference list (spec §3,
/// §4.2). Implemented with an explicit stack rather than native recursion
/// so that arbitrarily deep inputs never overflow the call stack (spec
/// §9): a container's children are pushed in reverse order, which a LIFO
/// stack pops back out in original left-to-right, depth-first order.
pub(crate) fn walk(old: &Value, new: &Value, resolved: &ResolvedOptions) -> Vec<Difference> {
    let mut stack = vec![Task::Compare(Path::root(), old, new)];
    let mut out = Vec::new();

    while let Some(task) = stack.pop() {
        match task {
            Task::Leaf(difference) => out.push(difference),
            Task::Compare(path, a, b) => compare(path, a, b, resolved, &mut stack, &mut out),
        }
    }

    out
}

fn compare<'a>(
    path: Path,
    a: &'a Value,
    b: &'a Value,
    resolved: &ResolvedOptions,
    stack: &mut Vec<Task<'a>>,
    out: &mut Vec<Difference>,
) {
    if std::mem::discriminant(a) != std::mem::discriminant(b) {
        out.push(type_changed(path, a, b, resolved));
        return;
    }

    match (a, b) {
        (Value::Null, Value::Null) => push_scalar(out, path, a, b, true, resolved),
        (Value::Bool(x), Value::Bool(y)) => push_scalar(out, path, a, b, x == y, resolved),
        (Value::Integer(x), Value::Integer(y)) => push_scalar(out, path, a, b, x == y, resolved),
        (Value::Float(x), Value::Float(y)) => {
            let equivalent = floats_equivalent(*x, *y, resolved.options.epsilon);
            push_scalar(out, path, a, b, equivalent, resolved);
        }
        (Value::String(x), Value::String(y)) => {
            let equivalent = strings_equivalent(
                x,
                y,
                resolved.options.ignore_whitespace,
                resolved.options.ignore_case,
            );
            push_scalar(out, path, a, b, equivalent, resolved);
        }
        (Value::Mapping(ma), Value::Mapping(mb)) => {
            let children = mapping_children(ma, mb, resolved);
            push_children(stack, &path, children, resolved);
        }
        (Value::Sequence(sa), Value::Sequence(sb)) => {
            let children = match &resolved.options.array_id_key {
                Some(id_key) => sequence::align(sa, sb, id_key),
                None => positional::align(sa, sb),
            };
            push_children(stack, &path, children, resolved);
        }
        _ => unreachable!("discriminant check above guarantees a matching variant pair"),
    }
}

fn mapping_children<'a>(
    a: &'a indexmap::IndexMap<String, Value>,
    b: &'a indexmap::IndexMap<String, Value>,
    resolved: &ResolvedOptions,
) -> Vec<Child<'a>> {
    let mut children = Vec::new();

    for key in a.keys() {
        if resolved.key_is_ignored(key) {
            continue;
        }
        let a_value = &a[key];
        match b.get(key) {
            Some(b_value) => children.push(Child::recurse_key(key.clone(), a_value, b_value)),
            None => children.push(Child::removed_key(key.clone(), a_value)),
        }
    }

    for key in b.keys() {
        if a.contains_key(key) || resolved.key_is_ignored(key) {
            continue;
        }
        children.push(Child::added_key(key.clone(), &b[key]));
    }

    children
}

fn push_children<'a>(
    stack: &mut Vec<Task<'a>>,
    path: &Path,
    children: Vec<Child<'a>>,
    resolved: &ResolvedOptions,
) {
    for child in children.into_iter().rev() {
        let child_path = path.push_segment(child.segment);
        match child.kind {
            ChildKind::Recurse(a, b) => stack.push(Task::Compare(child_path, a, b)),
            ChildKind::Added(value) => stack.push(Task::Leaf(Difference::Added {
                value: value.clone(),
                value_type: type_tag(value, resolved),
                path: child_path,
            })),
            ChildKind::Removed(value) => stack.push(Task::Leaf(Difference::Removed {
                value: value.clone(),
                value_type: type_tag(value, resolved),
                path: child_path,
            })),
        }
    }
}

fn push_scalar(
    out: &mut Vec<Difference>,
    path: Path,
    a: &Value,
    b: &Value,
    equivalent: bool,
    resolved: &ResolvedOptions,
) {
    if equivalent {
        if resolved.options.show_unchanged {
            out.push(Difference::Unchanged {
                value: a.clone(),
                value_type: type_tag(a, resolved),
                path,
            });
        }
        return;
    }

    out.push(Difference::Modified {
        old_value: a.clone(),
        new_value: b.clone(),
        old_type: type_tag(a, resolved),
        new_type: type_tag(b, resolved),
        path,
    });
}

fn type_changed(path: Path, a: &Value, b: &Value, resolved: &ResolvedOptions) -> Difference {
    Difference::TypeChanged {
        old_value: a.clone(),
        new_value: b.clone(),
        old_type: type_tag(a, resolved),
        new_type: type_tag(b, resolved),
        path,
    }
}

fn type_tag(value: &Value, resolved: &ResolvedOptions) -> Option<ValueKind> {
    resolved.options.show_types.then(|| value.kind())
}
