use core::fmt;

use super::{Document, Element, Geometry, Node};

use serde_json::{Map, Value, json};

// -----------------------
// Module-scope helpers
// -----------------------

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_indent(formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        formatter.write_str("  ")?;
    }
    Ok(())
}

fn geometry_to_json(geometry: &Geometry) -> Value {
    serde_json::to_value(geometry).unwrap_or(Value::Null)
}

fn children_to_json(children: &[Node]) -> Vec<Value> {
    children
        .iter()
        .map(node_to_json)
        .filter(|value| !value.is_null())
        .collect()
}

fn element_to_json(element: &Element) -> Value {
    let mut attrs_obj = Map::new();
    for (name, value) in &element.attributes {
        attrs_obj.insert(name.clone(), Value::String(value.clone()));
    }
    let mut style_obj = Map::new();
    for (property, entry) in &element.computed_style {
        style_obj.insert(property.clone(), Value::String(entry.value.clone()));
    }
    json!({
        "type": "element",
        "tag": element.tag_name,
        "attrs": Value::Object(attrs_obj),
        "style": Value::Object(style_obj),
        "geometry": geometry_to_json(&element.geometry),
        "children": children_to_json(&element.children),
    })
}

fn node_to_json(node: &Node) -> Value {
    match node {
        Node::Element(element) => element_to_json(element),
        Node::Text(text) => {
            if text.content.trim().is_empty() {
                Value::Null
            } else {
                json!({ "type": "text", "text": text.content })
            }
        }
    }
}

fn fmt_geometry(formatter: &mut fmt::Formatter<'_>, geometry: &Geometry) -> fmt::Result {
    if let (Some(left), Some(top), Some(width), Some(height)) =
        (geometry.left, geometry.top, geometry.width, geometry.height)
    {
        write!(formatter, " @({left},{top} {width}x{height})")?;
    } else if let (Some(width), Some(height)) = (geometry.width, geometry.height) {
        write!(formatter, " @({width}x{height})")?;
    }
    Ok(())
}

fn fmt_node(formatter: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    match node {
        Node::Element(element) => {
            write_indent(formatter, depth)?;
            write!(formatter, "<{}", element.tag_name)?;
            for (name, value) in &element.attributes {
                write!(formatter, " {}=\"{}\"", name, escape_text(value))?;
            }
            write!(formatter, ">")?;
            fmt_geometry(formatter, &element.geometry)?;
            writeln!(formatter)?;
            for child in &element.children {
                fmt_node(formatter, child, depth + 1)?;
            }
            write_indent(formatter, depth)?;
            writeln!(formatter, "</{}>", element.tag_name)?;
        }
        Node::Text(text) => {
            // Whitespace-only runs are noise in the printed tree.
            if text.content.chars().all(char::is_whitespace) {
                return Ok(());
            }
            write_indent(formatter, depth)?;
            writeln!(formatter, "\"{}\"", escape_text(&text.content))?;
        }
    }
    Ok(())
}

impl fmt::Display for Document {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "#document")?;
        for child in &self.children {
            fmt_node(formatter, child, 1)?;
        }
        Ok(())
    }
}

impl Document {
    /// Build a deterministic JSON representation of the tree.
    /// Schema:
    /// - Document: { "type":"document", "children":[ ... ] }
    /// - Element: { "type":"element", "tag":"div", "attrs":{..}, "style":{..}, "geometry":{..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." } (whitespace-only runs are omitted)
    pub fn to_json_value(&self) -> Value {
        json!({ "type": "document", "children": children_to_json(&self.children) })
    }

    /// Pretty JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_else(|_| String::from("{}"))
    }
}
