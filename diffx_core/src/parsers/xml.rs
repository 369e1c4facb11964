use indexmap::IndexMap;
use roxmltree::Node;

use diffx_value::{DiffError, Value};

/// Parse an XML document into a [`Value`] (spec §4.7) per the convention
/// fixed in SPEC_FULL.md §3: an element becomes a `Mapping`; attributes
/// nest under `"@attributes"` (omitted if none); trimmed, concatenated
/// text content lives under `"#text"` (omitted if empty); repeated child
/// tag names become a `Sequence`; a leaf element with no attributes or
/// children collapses to a bare `String` of its text.
pub fn parse_xml(content: &str) -> Result<Value, DiffError> {
    let document = roxmltree::Document::parse(content).map_err(|err| DiffError::parse("xml", err))?;
    Ok(convert_element(document.root_element()))
}

fn convert_element(node: Node) -> Value {
    let attributes = collect_attributes(node);
    let text = collect_text(node);
    let children = collect_children(node);

    if attributes.is_empty() && children.is_empty() && !text.is_empty() {
        return Value::String(text);
    }

    let mut mapping = IndexMap::new();
    if !attributes.is_empty() {
        mapping.insert("@attributes".to_string(), Value::Mapping(attributes));
    }
    if !text.is_empty() {
        mapping.insert("#text".to_string(), Value::String(text));
    }
    for (tag, mut values) in children {
        let value = if values.len() == 1 {
            values.pop().unwrap()
        } else {
            Value::Sequence(values)
        };
        mapping.insert(tag, value);
    }

    Value::Mapping(mapping)
}

fn collect_attributes(node: Node) -> IndexMap<String, Value> {
    let mut attributes = IndexMap::new();
    for attribute in node.attributes() {
        attributes.insert(
            attribute.name().to_string(),
            Value::String(attribute.value().to_string()),
        );
    }
    attributes
}

fn collect_text(node: Node) -> String {
    let mut parts = Vec::new();
    for child in node.children() {
        if let Some(text) = child.text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }
    parts.join("")
}

/// Child elements grouped by tag name, first-seen order preserved, each
/// group in document order.
fn collect_children(node: Node) -> IndexMap<String, Vec<Value>> {
    let mut children: IndexMap<String, Vec<Value>> = IndexMap::new();
    for child in node.children().filter(|n| n.is_element()) {
        let tag = child.tag_name().name().to_string();
        children.entry(tag).or_default().push(convert_element(child));
    }
    children
}
