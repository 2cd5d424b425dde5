//! Markdown document serialization
//!
//! Converts Markdown document nodes into Markdown text.

use crate::ast::{Block, Inline, ListItem};
use crate::options::{CodeBlockStyle, HeadingStyle, Options};

/// Serialize a block to Markdown string
pub fn serialize(block: &Block, options: &Options) -> String {
    let mut output = String::with_capacity(4096);
    serialize_block(block, options, &mut output);

    // Post-process: collapse multiple newlines and trim
    collapse_and_trim(&mut output);
    output
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match block {
        Block::Document(blocks) => serialize_blocks(blocks, options, out),

        Block::Heading { level, content } => serialize_heading(*level, content, options, out),

        Block::Paragraph(inlines) => {
            let start_len = out.len();
            serialize_inlines(inlines, options, out);
            if out[start_len..].trim().is_empty() {
                out.truncate(start_len);
            } else {
                out.push_str("\n\n");
            }
        }

        Block::BlockQuote(blocks) => {
            let start_len = out.len();
            serialize_blocks(blocks, options, out);

            // Process the content we just wrote to add > prefixes
            let content = out[start_len..].trim_end().to_string();
            out.truncate(start_len);

            for (i, line) in content.lines().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push('>');
                if !line.is_empty() {
                    out.push(' ');
                    out.push_str(line);
                }
            }
            out.push_str("\n\n");
        }

        Block::List {
            ordered,
            start,
            items,
        } => serialize_list(*ordered, *start, items, options, out),

        Block::CodeBlock { language, code } => {
            serialize_code_block(language.as_deref(), code, options, out)
        }

        Block::ThematicBreak => {
            out.push_str(&options.hr);
            out.push_str("\n\n");
        }

        Block::Raw(markdown) => {
            out.push_str(markdown.trim_matches('\n'));
            out.push_str("\n\n");
        }
    }
}

fn serialize_blocks(blocks: &[Block], options: &Options, out: &mut String) {
    for block in blocks {
        if !block.is_blank() {
            serialize_block(block, options, out);
        }
    }
}

fn serialize_heading(level: u8, content: &[Inline], options: &Options, out: &mut String) {
    let start_len = out.len();
    serialize_inlines(content, options, out);

    if out[start_len..].trim().is_empty() {
        out.truncate(start_len);
        return;
    }

    let text = out[start_len..].trim().to_string();
    out.truncate(start_len);

    match options.heading_style {
        HeadingStyle::Setext if level <= 2 => {
            let underline = if level == 1 { "=" } else { "-" };
            out.push_str(&text);
            out.push('\n');
            out.push_str(&underline.repeat(text.chars().count()));
            out.push_str("\n\n");
        }
        _ => {
            out.push_str(&"#".repeat(level.clamp(1, 6) as usize));
            out.push(' ');
            out.push_str(&text);
            out.push_str("\n\n");
        }
    }
}

fn serialize_list(
    ordered: bool,
    start: u32,
    items: &[ListItem],
    options: &Options,
    out: &mut String,
) {
    let mut number = start;

    for item in items {
        let marker = if ordered {
            let marker = format!("{number}.");
            if options.increment_list_marker {
                number = number.saturating_add(1);
            }
            marker
        } else {
            options.bullet_list_marker.to_string()
        };

        let body = serialize_list_item(item, options);

        // Continuation lines line up with the first character after the marker
        let continuation_indent = " ".repeat(marker.len() + 1);

        out.push_str(&marker);
        if body.is_empty() {
            out.push('\n');
            continue;
        }
        for (i, line) in body.lines().enumerate() {
            if !line.is_empty() {
                out.push_str(if i == 0 { " " } else { continuation_indent.as_str() });
                out.push_str(line);
            }
            out.push('\n');
        }
    }

    out.push('\n');
}

/// Render the blocks of one list item without marker or indentation.
///
/// Items are tight: a nested list follows its parent text on the next line.
fn serialize_list_item(item: &ListItem, options: &Options) -> String {
    let mut body = String::new();

    for block in &item.content {
        if block.is_blank() {
            continue;
        }

        let mut rendered = String::new();
        serialize_block(block, options, &mut rendered);
        let rendered = rendered.trim_end_matches('\n');

        if !body.is_empty() {
            body.push_str(if matches!(block, Block::List { .. }) {
                "\n"
            } else {
                "\n\n"
            });
        }
        body.push_str(rendered);
    }

    body
}

fn serialize_code_block(language: Option<&str>, code: &str, options: &Options, out: &mut String) {
    match options.code_block_style {
        CodeBlockStyle::Fenced => {
            // A fence inside the code would close the block early
            let mut fence = options.fence.clone();
            while code.contains(fence.as_str()) {
                fence.push('`');
            }

            out.push_str(&fence);
            out.push_str(language.unwrap_or(""));
            out.push('\n');
            out.push_str(code.trim_end_matches('\n'));
            out.push('\n');
            out.push_str(&fence);
            out.push_str("\n\n");
        }
        CodeBlockStyle::Indented => {
            for line in code.lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
    }
}

fn serialize_inlines(inlines: &[Inline], options: &Options, out: &mut String) {
    for inline in inlines {
        serialize_inline(inline, options, out);
    }
}

fn serialize_inline(inline: &Inline, options: &Options, out: &mut String) {
    match inline {
        Inline::Text(text) | Inline::Raw(text) => out.push_str(text),

        Inline::Strong(content) => {
            let start = out.len();
            serialize_inlines(content, options, out);
            wrap_from(start, &options.strong_delimiter, out);
        }

        Inline::Emphasis(content) => {
            let start = out.len();
            serialize_inlines(content, options, out);
            let mut buf = [0u8; 4];
            wrap_from(start, options.em_delimiter.encode_utf8(&mut buf), out);
        }

        Inline::Code(code) => {
            if !code.is_empty() {
                let backticks = if code.contains('`') { "``" } else { "`" };
                let space = if code.starts_with('`') || code.ends_with('`') {
                    " "
                } else {
                    ""
                };
                out.push_str(backticks);
                out.push_str(space);
                out.push_str(code);
                out.push_str(space);
                out.push_str(backticks);
            }
        }

        Inline::Link {
            content,
            url,
            title,
        } => {
            out.push('[');
            serialize_inlines(content, options, out);
            out.push_str("](");
            out.push_str(url);
            push_title(title.as_deref(), out);
            out.push(')');
        }

        Inline::Image { alt, url, title } => {
            out.push_str("![");
            out.push_str(alt);
            out.push_str("](");
            out.push_str(url);
            push_title(title.as_deref(), out);
            out.push(')');
        }

        Inline::LineBreak => out.push_str("  \n"),
    }
}

/// Wrap everything written since `start` in `delimiter`.
///
/// Leading and trailing whitespace is moved outside the delimiters and blank
/// content is dropped.
fn wrap_from(start: usize, delimiter: &str, out: &mut String) {
    let inner = out.split_off(start);
    let content = inner.trim();
    if content.is_empty() {
        return;
    }

    let leading = &inner[..inner.len() - inner.trim_start().len()];
    let trailing = &inner[inner.trim_end().len()..];

    out.push_str(leading);
    out.push_str(delimiter);
    out.push_str(content);
    out.push_str(delimiter);
    out.push_str(trailing);
}

fn push_title(title: Option<&str>, out: &mut String) {
    if let Some(t) = title {
        out.push_str(" \"");
        out.push_str(&t.replace('"', "\\\""));
        out.push('"');
    }
}

/// Collapse multiple consecutive newlines into at most two, in place
fn collapse_and_trim(s: &mut String) {
    let trimmed = s.trim_matches('\n');
    let mut result = String::with_capacity(trimmed.len());
    let mut newline_count = 0;

    for c in trimmed.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push(c);
            }
        } else {
            newline_count = 0;
            result.push(c);
        }
    }

    *s = result;
}
