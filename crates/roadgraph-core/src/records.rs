//! Utilities for records output format
//!
//! Every record is one line. The first is a header, `H roadgraph=1
//! records=1 mode=<mode> ...`, followed by node (`N`), edge (`E`) and
//! datum (`D`) lines.

use crate::graph::{Edge, Node};

/// Escape a string for a quoted records field.
/// Backslashes, double quotes and line breaks become `\\`, `\"`, `\n` and
/// `\r`, so a field never spans more than one line.
pub fn escape_quotes(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str(r#"\""#),
            '\n' => escaped.push_str(r"\n"),
            '\r' => escaped.push_str(r"\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render a label bare when it is a single token, quoted otherwise
pub fn label_field(node: &Node) -> String {
    let label = node.label();
    let bare = !label.is_empty()
        && !label.contains(|c: char| c.is_whitespace() || c == '"' || c == '\\');
    if bare {
        label.to_string()
    } else {
        format!("\"{}\"", escape_quotes(label))
    }
}

/// Header line with `key=value` fields appended in order
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H roadgraph=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

pub fn node_line(node: &Node) -> String {
    format!("N {}", label_field(node))
}

pub fn edge_line(edge: &Edge) -> String {
    format!(
        "E {} {} {}",
        label_field(&edge.origin),
        label_field(&edge.terminus),
        edge.cost
    )
}

pub fn datum_line(node: &Node, key: &str, value: impl std::fmt::Display) -> String {
    format!("D {} {}={}", label_field(node), key, value)
}
