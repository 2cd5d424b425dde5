//! Document tree structure.
//!
//! The tree is owned top-down: every child belongs to exactly one parent and
//! there are no back links. `Clone` is a deep copy.

use indexmap::IndexMap;

use crate::tag::Tag;

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

/// An element with its attributes and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    /// Lower-cased element name as written in the source, aliases included
    pub name: String,
    /// Attribute name to value, in insertion order
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

/// A text leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    /// The value already is Markdown and must be emitted as is.
    ///
    /// Only set on text written by the normalization pass.
    pub verbatim: bool,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::named(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::named(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create the root node of a tree
    pub fn root() -> Self {
        Node::Element(Element::new(Tag::Root))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(Text {
            value: content.to_string(),
            verbatim: false,
        })
    }

    /// Create a text node holding ready-made Markdown
    pub fn verbatim(markdown: String) -> Self {
        Node::Text(Text {
            value: markdown,
            verbatim: true,
        })
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// The element, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// The tag, if this is an element
    pub fn tag(&self) -> Option<&Tag> {
        self.as_element().map(|e| &e.tag)
    }

    /// Get all child nodes; text nodes have none
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.as_element().into_iter().flat_map(|e| e.children.iter())
    }

    /// Add a child node; ignored on text nodes, which never have children
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Builder that appends a text child
    pub fn with_text(self, content: &str) -> Self {
        self.with_child(Node::text(content))
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|e| e.attr(name))
    }

    /// Concatenate every text leaf below this node in document order.
    ///
    /// No separators are inserted between leaves.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut |_: &Element| true, &mut out);
        out
    }
}

impl Element {
    /// Create an element without attributes or children
    pub fn new(tag: Tag) -> Self {
        Self {
            name: tag.name().to_string(),
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element from its source name, keeping aliases like `b`
    pub fn named(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        Self {
            tag: Tag::from_name(&name),
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Change the kind of this element; the name follows the new tag
    pub fn retag(&mut self, tag: Tag) {
        self.name = tag.name().to_string();
        self.tag = tag;
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing one of the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some((_, v)) = self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            *v = value.to_string();
            return;
        }
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute, keeping the order of the others
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let key = self
            .attributes
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))?
            .clone();
        self.attributes.shift_remove(&key)
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Text of all descendants, see [`Node::text_content`]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut |_: &Element| true, &mut out);
        }
        out
    }

    /// Text of all descendants, skipping any subtree rooted at an element
    /// for which `descend` returns `false`
    pub fn text_content_where(&self, mut descend: impl FnMut(&Element) -> bool) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut descend, &mut out);
        }
        out
    }

    /// Pre-order search for descendants matching `predicate`.
    ///
    /// The search continues below a match, so nested matches are returned too.
    pub fn descendants_where<'a>(&'a self, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        find_descendants(self, &predicate, true, &mut found);
        found
    }

    /// Pre-order search for the outermost descendants matching `predicate`.
    ///
    /// The search stops below a match.
    pub fn outermost_where<'a>(&'a self, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        find_descendants(self, &predicate, false, &mut found);
        found
    }
}

fn collect_text(node: &Node, descend: &mut dyn FnMut(&Element) -> bool, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.value),
        Node::Element(element) => {
            if descend(element) {
                for child in &element.children {
                    collect_text(child, descend, out);
                }
            }
        }
    }
}

fn find_descendants<'a>(
    element: &'a Element,
    predicate: &dyn Fn(&Element) -> bool,
    below_match: bool,
    found: &mut Vec<&'a Element>,
) {
    for child in element.element_children() {
        let matched = predicate(child);
        if matched {
            found.push(child);
        }
        if !matched || below_match {
            find_descendants(child, predicate, below_match, found);
        }
    }
}
