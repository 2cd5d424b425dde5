//! Building document trees from hast JSON.
//!
//! [hast](https://github.com/syntax-tree/hast) is the HTML syntax tree format
//! of the unified ecosystem. Comments and doctypes are dropped; positional
//! data and any other extra fields are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::node::{Element, Node};
use crate::tag::Tag;
use crate::{Error, Result};

/// Turns a source document into a document tree
pub trait TreeProducer {
    fn produce(&self, source: &str) -> Result<Node>;
}

/// Producer for hast JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct HastProducer;

impl HastProducer {
    pub fn new() -> Self {
        Self
    }
}

impl TreeProducer for HastProducer {
    fn produce(&self, source: &str) -> Result<Node> {
        if source.trim().is_empty() {
            return Err(Error::InvalidInput("empty document".to_string()));
        }
        let raw: HastNode = serde_json::from_str(source)?;
        Ok(build(raw).unwrap_or_else(Node::root))
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum HastNode {
    Root {
        #[serde(default)]
        children: Vec<HastNode>,
    },
    Element {
        #[serde(rename = "tagName")]
        tag_name: String,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
        #[serde(default)]
        children: Vec<HastNode>,
    },
    Text {
        #[serde(default)]
        value: String,
    },
    Comment {},
    Doctype {},
}

fn build(raw: HastNode) -> Option<Node> {
    match raw {
        HastNode::Root { children } => Some(with_children(Element::new(Tag::Root), children)),
        HastNode::Element {
            tag_name,
            properties,
            children,
        } => {
            let mut element = Element::named(&tag_name);
            for (name, value) in properties.unwrap_or_default() {
                if let Some(value) = property_value(&value) {
                    element.set_attr(&attribute_name(&name), &value);
                }
            }
            Some(with_children(element, children))
        }
        HastNode::Text { value } => Some(Node::text(&value)),
        HastNode::Comment {} | HastNode::Doctype {} => None,
    }
}

fn with_children(mut element: Element, children: Vec<HastNode>) -> Node {
    element.children = children.into_iter().filter_map(build).collect();
    Node::Element(element)
}

/// HTML attribute name for a hast property name
fn attribute_name(property: &str) -> String {
    match property {
        "className" => "class".to_string(),
        "htmlFor" => "for".to_string(),
        "httpEquiv" => "http-equiv".to_string(),
        "acceptCharset" => "accept-charset".to_string(),
        other => {
            if let Some(rest) = camel_suffix(other, "data") {
                // dataFooBar -> data-foo-bar
                let mut name = String::from("data");
                for c in rest.chars() {
                    if c.is_ascii_uppercase() {
                        name.push('-');
                    }
                    name.push(c.to_ascii_lowercase());
                }
                name
            } else if let Some(rest) = camel_suffix(other, "aria") {
                format!("aria-{}", rest.to_lowercase())
            } else {
                other.to_lowercase()
            }
        }
    }
}

/// The part of `property` after `prefix` when it continues with a capital
fn camel_suffix<'a>(property: &'a str, prefix: &str) -> Option<&'a str> {
    property
        .strip_prefix(prefix)
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
}

/// Attribute value for a hast property value, `None` when it is omitted
fn property_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some(String::new()),
        Value::Bool(false) | Value::Null | Value::Object(_) => None,
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(property_value)
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}
