//! HTML serialization of a document tree.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::node::{Element, Node};
use crate::tag::{is_void, Tag};

/// Render a tree as HTML.
///
/// The root element is transparent: only its children are rendered.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&encode_text(&text.value)),
        Node::Element(element) if element.tag == Tag::Root => write_children(element, out),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_children(element: &Element, out: &mut String) {
    for child in &element.children {
        write_node(child, out);
    }
}

fn write_element(element: &Element, out: &mut String) {
    let name = element.name.as_str();

    out.push('<');
    out.push_str(name);
    for (attr, value) in &element.attributes {
        out.push(' ');
        out.push_str(attr);
        // Empty attributes collapse to the bare name
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
    out.push('>');

    if is_void(name) {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
