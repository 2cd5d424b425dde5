//! Normalization pass.
//!
//! Rewrites a tree so that it only uses elements the Markdown document model
//! understands. The pass consumes its input and returns the rewritten tree;
//! callers that still need the original hand in a clone.
//!
//! | element | rewrite |
//! |---|---|
//! | `s` | first text child is wrapped in verbatim `~~` markers, element becomes `span` |
//! | `table` | whole subtree becomes a verbatim text node with a pipe table |
//! | `u`, `sub`, `sup` | element becomes `span` |
//! | `span` with `style` | `strong` / `em` for bold / italic styles, `style` removed |

use crate::markdown::style::{style_emphasis, StyleEmphasis};
use crate::markdown::table::transcode_table;
use crate::node::{Element, Node};
use crate::tag::Tag;

/// Normalize a tree, see the module documentation for the rules.
///
/// Rules are applied pre-order: an element is rewritten before its children
/// are visited, and a replacement node is never visited again.
pub fn normalize(node: Node) -> Node {
    match node {
        Node::Text(_) => node,
        Node::Element(element) => normalize_element(element),
    }
}

fn normalize_element(mut element: Element) -> Node {
    match element.tag {
        Tag::Table => {
            let table = transcode_table(&element);
            return Node::verbatim(format!("\n\n{table}\n\n"));
        }

        // Only a direct leading text child is wrapped; anything richer keeps
        // the element as is and leaves it to the fallback.
        Tag::Strikethrough => {
            if let Some(Node::Text(_)) = element.children.first() {
                element.children.insert(0, Node::verbatim("~~".to_string()));
                element.children.insert(2, Node::verbatim("~~".to_string()));
                element.retag(Tag::Span);
            }
        }

        Tag::Underline | Tag::Subscript | Tag::Superscript => element.retag(Tag::Span),

        Tag::Span => {
            if let Some(style) = element.remove_attr("style") {
                match style_emphasis(&style) {
                    Some(StyleEmphasis::Strong) => element.retag(Tag::Strong),
                    Some(StyleEmphasis::Emphasis) => element.retag(Tag::Emphasis),
                    None => {}
                }
            }
        }

        Tag::Root
        | Tag::Heading(_)
        | Tag::Paragraph
        | Tag::UnorderedList
        | Tag::OrderedList
        | Tag::ListItem
        | Tag::TableSection
        | Tag::TableRow
        | Tag::TableCell { .. }
        | Tag::Emphasis
        | Tag::Strong
        | Tag::Link
        | Tag::Image
        | Tag::LineBreak
        | Tag::ThematicBreak
        | Tag::BlockQuote
        | Tag::Code
        | Tag::Preformatted
        | Tag::Division
        | Tag::Unknown(_) => {}
    }

    element.children = element.children.into_iter().map(normalize).collect();
    Node::Element(element)
}
