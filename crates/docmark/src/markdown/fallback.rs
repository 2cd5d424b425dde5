//! Text reconstruction used when the structural converter gives up.
//!
//! Both strategies read the original tree and never fail.

use crate::markdown::list::transcode_list;
use crate::markdown::table::transcode_table;
use crate::node::{Element, Node};
use crate::tag::Tag;

/// Lines at least this long are never promoted to headings
const HEADING_LINE_LIMIT: usize = 50;

/// Rebuild Markdown block by block from a tree.
///
/// Headings, paragraphs, lists and tables are emitted from their extracted
/// text and consume their whole subtree. Text outside those blocks is
/// emitted as a paragraph of its own. Any other element is only descended
/// into.
pub fn structured_fallback(node: &Node) -> String {
    let mut out = String::new();
    reconstruct(node, &mut out);
    out.trim().to_string()
}

fn reconstruct(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => push_block(text.value.trim(), out),
        Node::Element(element) => reconstruct_element(element, out),
    }
}

fn reconstruct_element(element: &Element, out: &mut String) {
    match &element.tag {
        Tag::Heading(level) => {
            let text = element.text_content();
            let text = text.trim();
            if !text.is_empty() {
                out.push_str(&"#".repeat(usize::from(*level)));
                out.push(' ');
                push_block(text, out);
            }
        }

        Tag::Paragraph => push_block(element.text_content().trim(), out),

        Tag::UnorderedList | Tag::OrderedList => {
            let ordered = element.tag == Tag::OrderedList;
            push_block(transcode_list(element, ordered, 0).trim_end(), out);
        }

        Tag::Table => {
            push_block(transcode_table(element).trim_end(), out);
        }

        Tag::Root
        | Tag::ListItem
        | Tag::TableSection
        | Tag::TableRow
        | Tag::TableCell { .. }
        | Tag::Emphasis
        | Tag::Strong
        | Tag::Strikethrough
        | Tag::Underline
        | Tag::Subscript
        | Tag::Superscript
        | Tag::Span
        | Tag::Link
        | Tag::Image
        | Tag::LineBreak
        | Tag::ThematicBreak
        | Tag::BlockQuote
        | Tag::Code
        | Tag::Preformatted
        | Tag::Division
        | Tag::Unknown(_) => {
            for child in &element.children {
                reconstruct(child, out);
            }
        }
    }
}

fn push_block(text: &str, out: &mut String) {
    if !text.is_empty() {
        out.push_str(text);
        out.push_str("\n\n");
    }
}

/// The older plain-text strategy: all text of the tree, with short
/// title-like lines turned into level 1 headings.
///
/// A line counts as a title when, trimmed, it is shorter than 50 characters,
/// starts with an ASCII uppercase letter and does not end in `.`, `!` or `?`.
pub fn plain_text_fallback(node: &Node) -> String {
    node.text_content()
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if looks_like_title(trimmed) {
                format!("# {trimmed}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn looks_like_title(line: &str) -> bool {
    line.chars().count() < HEADING_LINE_LIMIT
        && line.starts_with(|c: char| c.is_ascii_uppercase())
        && !line.ends_with(['.', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let root = Node::root()
            .with_child(Node::element("h2").with_text(" Title "))
            .with_child(Node::element("p").with_text("Body text."));
        assert_eq!(structured_fallback(&root), "## Title\n\nBody text.");
    }

    #[test]
    fn test_blank_blocks_are_skipped() {
        let root = Node::root()
            .with_child(Node::element("h1").with_text("  "))
            .with_child(Node::element("p"))
            .with_child(Node::element("p").with_text("kept"));
        assert_eq!(structured_fallback(&root), "kept");
    }

    #[test]
    fn test_unknown_wrapper_is_descended() {
        let root = Node::root().with_child(
            Node::element("widget")
                .with_child(Node::element("p").with_text("inside"))
                .with_text("loose"),
        );
        assert_eq!(structured_fallback(&root), "inside\n\nloose");
    }

    #[test]
    fn test_paragraph_consumes_its_inline_markup() {
        let root = Node::root().with_child(
            Node::element("p")
                .with_text("a ")
                .with_child(Node::element("s").with_text("b"))
                .with_text(" c"),
        );
        assert_eq!(structured_fallback(&root), "a b c");
    }

    #[test]
    fn test_list_is_emitted_once() {
        let root = Node::root().with_child(
            Node::element("ul").with_child(
                Node::element("li")
                    .with_child(Node::element("p").with_text("x"))
                    .with_child(Node::element("ol").with_child(Node::element("li").with_text("y"))),
            ),
        );
        assert_eq!(structured_fallback(&root), "- x\n  1. y");
    }

    #[test]
    fn test_table_block() {
        let root = Node::root()
            .with_child(Node::element("p").with_text("before"))
            .with_child(
                Node::element("table").with_child(
                    Node::element("tr")
                        .with_child(Node::element("td").with_text("A"))
                        .with_child(Node::element("td").with_text("B")),
                ),
            )
            .with_child(Node::element("p").with_text("after"));
        assert_eq!(
            structured_fallback(&root),
            "before\n\n| A | B |\n| --- | --- |\n\nafter"
        );
    }

    #[test]
    fn test_blocks_after_table_and_list_are_separated() {
        let root = Node::root()
            .with_child(Node::element("table"))
            .with_child(Node::element("p").with_text("after table"))
            .with_child(Node::element("ol").with_child(Node::element("li").with_text("one")))
            .with_child(Node::element("p").with_text("after list"));
        assert_eq!(
            structured_fallback(&root),
            "[Empty Table]\n\nafter table\n\n1. one\n\nafter list"
        );
    }

    #[test]
    fn test_empty_list_adds_nothing() {
        let root = Node::root()
            .with_child(Node::element("ul"))
            .with_child(Node::element("p").with_text("text"));
        assert_eq!(structured_fallback(&root), "text");
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(structured_fallback(&Node::root()), "");
    }

    #[test]
    fn test_plain_text_promotes_short_titles() {
        let root = Node::root()
            .with_text("Introduction\n")
            .with_text("This line ends with a period.\n")
            .with_text("lowercase start\n")
            .with_text("Is this a question?");
        assert_eq!(
            plain_text_fallback(&root),
            "# Introduction\nThis line ends with a period.\nlowercase start\nIs this a question?"
        );
    }

    #[test]
    fn test_plain_text_long_lines_stay() {
        let long = "A".repeat(60);
        let root = Node::root().with_text(&long);
        assert_eq!(plain_text_fallback(&root), long);
    }
}
