//! List transcoding.

use crate::node::Element;
use crate::tag::Tag;

/// Render a list subtree as indented Markdown list lines.
///
/// Only direct `li` children of `list` produce a line. A line is indented by
/// two spaces per `level` and carries `-` or an ordinal that starts at 1 and
/// only advances on items with text. Lists found inside an item are rendered
/// one level deeper right after that item's line, even when the item itself
/// is skipped for being empty.
pub fn transcode_list(list: &Element, ordered: bool, level: usize) -> String {
    let indent = "  ".repeat(level);
    let mut markdown = String::new();
    let mut ordinal: u32 = 1;

    for item in list.element_children().filter(|e| e.tag == Tag::ListItem) {
        let text = item.text_content_where(|e| !e.tag.is_list());
        let text = text.trim();

        if !text.is_empty() {
            markdown.push_str(&indent);
            if ordered {
                markdown.push_str(&ordinal.to_string());
                markdown.push('.');
                ordinal += 1;
            } else {
                markdown.push('-');
            }
            markdown.push(' ');
            markdown.push_str(text);
            markdown.push('\n');
        }

        for nested in item.outermost_where(|e| e.tag.is_list()) {
            let nested_ordered = nested.tag == Tag::OrderedList;
            markdown.push_str(&transcode_list(nested, nested_ordered, level + 1));
        }
    }

    markdown
}
