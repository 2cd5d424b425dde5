//! Table transcoding.
//!
//! Turns a table subtree straight into a pipe table. Rows and cells are
//! searched at any depth, so tables with wrappers or stray nesting still
//! yield their content.

use crate::node::Element;
use crate::tag::Tag;

/// Output for a table without any non-empty row
pub const EMPTY_TABLE: &str = "[Empty Table]";

/// Label for header cells that the first row does not provide
const MISSING_HEADER: &str = "Column";

/// Render a table subtree as a Markdown pipe table.
///
/// Every emitted row has the same number of columns: the length of the
/// longest input row. The first row becomes the header. Each line ends with
/// `\n`.
pub fn transcode_table(table: &Element) -> String {
    let rows = collect_rows(table);

    let Some(columns) = rows.iter().map(Vec::len).max() else {
        return EMPTY_TABLE.to_string();
    };

    let mut rows = rows.into_iter();
    let mut header = rows.next().unwrap_or_default();
    header.resize(columns, MISSING_HEADER.to_string());

    let mut markdown = String::new();
    push_row(&header, &mut markdown);
    push_row(&vec!["---".to_string(); columns], &mut markdown);

    for mut row in rows {
        row.resize(columns, String::new());
        push_row(&row, &mut markdown);
    }

    markdown
}

/// Gather trimmed cell text per row, dropping rows without cells
fn collect_rows(table: &Element) -> Vec<Vec<String>> {
    table
        .descendants_where(|e| e.tag == Tag::TableRow)
        .into_iter()
        .map(|row| {
            row.descendants_where(|e| matches!(e.tag, Tag::TableCell { .. }))
                .into_iter()
                .map(cell_text)
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

/// A blank cell becomes a single space so the row keeps its shape
fn cell_text(cell: &Element) -> String {
    let text = cell.text_content();
    let text = text.trim();
    if text.is_empty() {
        " ".to_string()
    } else {
        text.replace('\n', " ").replace('|', "\\|")
    }
}

fn push_row(cells: &[String], out: &mut String) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |\n");
}
