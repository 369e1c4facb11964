use diffx_value::{Path, Value, ValueKind};
use serde::Serialize;

/// One semantic difference between two compared values (spec §3).
///
/// `Modified` is used when both sides share a variant and compared
/// unequal as scalars; any cross-variant change is `TypeChanged` instead,
/// never `Modified` — see [`diffx_value::Value`]'s own doc comment.
#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    Added {
        path: Path,
        value: Value,
        value_type: Option<ValueKind>,
    },
    Removed {
        path: Path,
        value: Value,
        value_type: Option<ValueKind>,
    },
    Modified {
        path: Path,
        old_value: Value,
        new_value: Value,
        old_type: Option<ValueKind>,
        new_type: Option<ValueKind>,
    },
    TypeChanged {
        path: Path,
        old_value: Value,
        new_value: Value,
        old_type: Option<ValueKind>,
        new_type: Option<ValueKind>,
    },
    Unchanged {
        path: Path,
        value: Value,
        value_type: Option<ValueKind>,
    },
}

impl Difference {
    pub fn path(&self) -> &Path {
        match self {
            Difference::Added { path, .. }
            | Difference::Removed { path, .. }
            | Difference::Modified { path, .. }
            | Difference::TypeChanged { path, .. }
            | Difference::Unchanged { path, .. } => path,
        }
    }

    /// Lower this record into the canonical wire shape (spec §6), shared
    /// by the `json` and `yaml` formatters so both render identical field
    /// sets.
    pub(crate) fn to_wire(&self) -> WireRecord<'_> {
        match self {
            Difference::Added {
                path,
                value,
                value_type,
            } => WireRecord {
                kind: "Added",
                path: path.render(),
                value: Some(value),
                old_value: None,
                new_value: None,
                value_type: *value_type,
                old_type: None,
                new_type: None,
            },
            Difference::Removed {
                path,
                value,
                value_type,
            } => WireRecord {
                kind: "Removed",
                path: path.render(),
                value: Some(value),
                old_value: None,
                new_value: None,
                value_type: *value_type,
                old_type: None,
                new_type: None,
            },
            Difference::Modified {
                path,
                old_value,
                new_value,
                old_type,
                new_type,
            } => WireRecord {
                kind: "Modified",
                path: path.render(),
                value: None,
                old_value: Some(old_value),
                new_value: Some(new_value),
                value_type: None,
                old_type: *old_type,
                new_type: *new_type,
            },
            Difference::TypeChanged {
                path,
                old_value,
                new_value,
                old_type,
                new_type,
            } => WireRecord {
                kind: "TypeChanged",
                path: path.render(),
                value: None,
                old_value: Some(old_value),
                new_value: Some(new_value),
                value_type: None,
                old_type: *old_type,
                new_type: *new_type,
            },
            Difference::Unchanged {
                path,
                value,
                value_type,
            } => WireRecord {
                kind: "Unchanged",
                path: path.render(),
                value: Some(value),
                old_value: None,
                new_value: None,
                value_type: *value_type,
                old_type: None,
                new_type: None,
            },
        }
    }
}

/// Canonical wire shape for one [`Difference`] (spec §6). Shared by the
/// `json` and `yaml` formatters.
#[derive(Serialize)]
pub(crate) struct WireRecord<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_type: Option<ValueKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_type: Option<ValueKind>,
}
