//! End-to-end conversions through the public API

use docmark::markdown::transcode_list;
use docmark::{Converter, ConvertOptions, FallbackStrategy, Format, ModelError, Node};

fn table(rows: &[&[&str]]) -> Node {
    rows.iter().fold(Node::element("table"), |table, cells| {
        let row = cells.iter().fold(Node::element("tr"), |row, cell| {
            row.with_child(Node::element("td").with_text(cell))
        });
        table.with_child(row)
    })
}

#[test]
fn test_ragged_table_is_padded() {
    let tree = Node::root().with_child(table(&[&["A", "B"], &["1"]]));
    let result = Converter::new().convert(&tree, Format::Markdown);

    assert!(!result.is_degraded());
    assert_eq!(result.output, "| A | B |\n| --- | --- |\n| 1 |  |");
}

#[test]
fn test_empty_item_is_skipped_and_nested_list_follows_parent() {
    let list = Node::element("ul")
        .with_child(
            Node::element("li")
                .with_text("x")
                .with_child(Node::element("ol").with_child(Node::element("li").with_text("y"))),
        )
        .with_child(Node::element("li").with_text(""));

    assert_eq!(
        transcode_list(list.as_element().unwrap(), false, 0),
        "- x\n  1. y\n"
    );

    let result = Converter::new().to_markdown(&Node::root().with_child(list));
    assert!(!result.is_degraded());
    assert_eq!(result.output, "- x\n  1. y");
}

#[test]
fn test_strikethrough_becomes_tildes() {
    let tree = Node::root()
        .with_child(Node::element("p").with_child(Node::element("s").with_text("old")));
    let result = Converter::new().to_markdown(&tree);

    assert_eq!(result.output, "~~old~~");
    assert!(!result.output.contains("<s>"));
    assert!(!result.output.contains("<del>"));
}

#[test]
fn test_unsupported_tag_falls_back_to_reconstruction() {
    let tree = Node::root()
        .with_child(Node::element("h1").with_text("Title"))
        .with_child(
            Node::element("widget")
                .with_child(Node::element("p").with_text("Inside a widget.")),
        )
        .with_child(Node::element("ul").with_child(Node::element("li").with_text("item")))
        .with_child(table(&[&["A"], &["1"]]));

    let result = Converter::new().to_markdown(&tree);

    assert_eq!(
        result.warning,
        Some(ModelError::Unsupported {
            tag: "widget".to_string()
        })
    );
    assert_eq!(
        result.output,
        "# Title\n\nInside a widget.\n\n- item\n\n| A |\n| --- |\n| 1 |"
    );
}

#[test]
fn test_fallback_reads_the_original_tree() {
    // The structured fallback sees the `s` element, not the tilde text
    let tree = Node::root()
        .with_child(Node::element("p").with_child(Node::element("s").with_text("old")))
        .with_child(Node::element("marquee").with_text("new"));

    let result = Converter::new().to_markdown(&tree);
    assert!(result.is_degraded());
    assert_eq!(result.output, "old\n\nnew");
}

#[test]
fn test_plain_text_strategy() {
    let converter = Converter::with_options(ConvertOptions {
        fallback: FallbackStrategy::PlainText,
        ..Default::default()
    });
    let tree = Node::root()
        .with_child(Node::element("h1").with_text("Quarterly Report\n"))
        .with_child(Node::element("widget").with_text("numbers went up."));

    let result = converter.to_markdown(&tree);
    assert!(result.is_degraded());
    assert_eq!(result.output, "# Quarterly Report\nnumbers went up.");
}

#[test]
fn test_html_output_is_not_degraded() {
    let tree = Node::root()
        .with_child(Node::element("widget").with_text("a & b"))
        .with_child(Node::element("hr"));
    let result = Converter::new().convert(&tree, Format::Html);

    assert_eq!(result.output, "<widget>a &amp; b</widget><hr>");
    assert_eq!(result.warning, None);
}

#[test]
fn test_styled_spans_from_hast() {
    let source = r#"{"type": "root", "children": [
        {"type": "element", "tagName": "p", "children": [
            {"type": "element", "tagName": "span",
             "properties": {"style": "font-weight:700"},
             "children": [{"type": "text", "value": "bold"}]},
            {"type": "text", "value": " and "},
            {"type": "element", "tagName": "span",
             "properties": {"style": "font-style: italic"},
             "children": [{"type": "text", "value": "italic"}]},
            {"type": "text", "value": " and "},
            {"type": "element", "tagName": "sub",
             "children": [{"type": "text", "value": "low"}]}
        ]}
    ]}"#;

    let converter = Converter::new();
    let markdown = converter.convert_source(source, Format::Markdown).unwrap();
    assert_eq!(markdown.output, "**bold** and *italic* and low");

    let html = converter.convert_source(source, Format::Html).unwrap();
    assert_eq!(
        html.output,
        "<p><span style=\"font-weight:700\">bold</span> and \
         <span style=\"font-style: italic\">italic</span> and <sub>low</sub></p>"
    );
}

#[test]
fn test_html_keeps_source_names_and_attribute_spelling() {
    let source = r#"{"type": "root", "children": [
        {"type": "element", "tagName": "section",
         "properties": {"dataSectionId": "intro", "ariaLabel": "Intro"},
         "children": [
            {"type": "element", "tagName": "b", "children": [{"type": "text", "value": "x"}]},
            {"type": "element", "tagName": "i", "children": [{"type": "text", "value": "y"}]}
        ]}
    ]}"#;

    let result = Converter::new().convert_source(source, Format::Html).unwrap();
    assert_eq!(
        result.output,
        "<section aria-label=\"Intro\" data-section-id=\"intro\"><b>x</b><i>y</i></section>"
    );
}

#[test]
fn test_tildes_in_text_are_escaped_but_markers_are_not() {
    let tree = Node::root().with_child(
        Node::element("p")
            .with_text("~~not struck~~ ")
            .with_child(Node::element("del").with_text("a~b")),
    );
    let result = Converter::new().to_markdown(&tree);

    assert!(!result.is_degraded());
    assert_eq!(result.output, "\\~\\~not struck\\~\\~ ~~a\\~b~~");
}

#[test]
fn test_largest_ordered_start_converts() {
    let tree = Node::root().with_child(
        Node::element_with_attrs("ol", vec![("start", "4294967295")])
            .with_child(Node::element("li").with_text("a"))
            .with_child(Node::element("li").with_text("b")),
    );
    let result = Converter::new().to_markdown(&tree);

    assert!(!result.is_degraded());
    assert_eq!(result.output, "4294967295. a\n4294967295. b");
}

#[test]
fn test_fallback_separates_table_from_next_block() {
    let tree = Node::root()
        .with_child(Node::element("table"))
        .with_child(Node::element("p").with_text("after"))
        .with_child(Node::element("blink").with_text("x"));
    let result = Converter::new().to_markdown(&tree);

    assert!(result.is_degraded());
    assert_eq!(result.output, "[Empty Table]\n\nafter\n\nx");
}

#[test]
fn test_converting_twice_is_identical() {
    let tree = Node::root()
        .with_child(Node::element("h2").with_text("Same"))
        .with_child(table(&[&["a", "b"]]))
        .with_child(Node::element("blink").with_text("again"));

    let converter = Converter::new();
    let snapshot = tree.clone();
    assert_eq!(converter.to_markdown(&tree), converter.to_markdown(&tree));
    assert_eq!(tree, snapshot);
}
