//! Convert a document tree into the Markdown document model.
//!
//! This is the preferred Markdown path. It expects a normalized tree and
//! refuses anything the model has no counterpart for, so that the caller can
//! fall back to text reconstruction instead of emitting a mangled document.

use docmark_core::{inlines_are_blank, serialize, Block, Inline, ListItem, Options};

use crate::node::{Element, Node, Text};
use crate::tag::Tag;

/// Why a tree could not be expressed in the Markdown document model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("`{tag}` has no Markdown equivalent")]
    Unsupported { tag: String },

    #[error("`{tag}` cannot appear inside `{parent}`")]
    Misplaced { tag: String, parent: String },

    #[error("conversion produced no output for a document with text")]
    LostContent,
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Convert a tree and serialize it with `options`
pub fn convert_structural(node: &Node, options: &Options) -> ModelResult<String> {
    let document = to_document(node)?;
    let markdown = serialize(&document, options);

    if markdown.trim().is_empty() && !node.text_content().trim().is_empty() {
        return Err(ModelError::LostContent);
    }

    Ok(markdown)
}

/// Convert a tree to a Markdown document model
pub fn to_document(node: &Node) -> ModelResult<Block> {
    let block = match node {
        Node::Element(element) => convert_element(element, &Tag::Root)?,
        Node::Text(_) => {
            let blocks = convert_children(std::slice::from_ref(node), &Tag::Root)?;
            Some(Block::Document(blocks))
        }
    };

    Ok(block.map(flatten_document).unwrap_or(Block::Document(Vec::new())))
}

/// Flatten nested documents
fn flatten_document(block: Block) -> Block {
    match block {
        Block::Document(mut blocks) if blocks.len() == 1 => match blocks.pop() {
            Some(only) => flatten_document(only),
            None => Block::Document(blocks),
        },
        other => other,
    }
}

fn unsupported(tag: &Tag) -> ModelError {
    ModelError::Unsupported {
        tag: tag.name().to_string(),
    }
}

fn misplaced(tag: &str, parent: &Tag) -> ModelError {
    ModelError::Misplaced {
        tag: tag.to_string(),
        parent: parent.name().to_string(),
    }
}

/// Elements that live inside a paragraph
fn is_phrasing(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Emphasis
            | Tag::Strong
            | Tag::Code
            | Tag::Span
            | Tag::Link
            | Tag::Image
            | Tag::LineBreak
            | Tag::Strikethrough
            | Tag::Underline
            | Tag::Subscript
            | Tag::Superscript
    )
}

/// Convert a sequence of sibling nodes to blocks.
///
/// Consecutive text and phrasing elements are gathered into one paragraph.
fn convert_children(children: &[Node], parent: &Tag) -> ModelResult<Vec<Block>> {
    let mut blocks = Vec::new();
    let mut run: Vec<Inline> = Vec::new();

    for child in children {
        match child {
            Node::Text(text) if text.verbatim => {
                flush_paragraph(&mut run, &mut blocks);
                blocks.push(Block::Raw(text.value.clone()));
            }
            Node::Text(text) => push_text(text, &mut run),
            Node::Element(element) if is_phrasing(&element.tag) => {
                push_inline_element(element, &mut run)?
            }
            Node::Element(element) => {
                flush_paragraph(&mut run, &mut blocks);
                if let Some(block) = convert_element(element, parent)? {
                    blocks.push(block);
                }
            }
        }
    }

    flush_paragraph(&mut run, &mut blocks);
    Ok(blocks)
}

fn flush_paragraph(run: &mut Vec<Inline>, blocks: &mut Vec<Block>) {
    let mut inlines = std::mem::take(run);
    trim_inlines(&mut inlines);
    if !inlines_are_blank(&inlines) {
        escape_block_start(&mut inlines);
        blocks.push(Block::Paragraph(inlines));
    }
}

/// Convert an element at block level
fn convert_element(element: &Element, parent: &Tag) -> ModelResult<Option<Block>> {
    let tag = &element.tag;

    match tag {
        Tag::Root | Tag::Division => {
            let mut blocks = convert_children(&element.children, tag)?;
            Ok(match blocks.len() {
                0 => None,
                1 => blocks.pop(),
                _ => Some(Block::Document(blocks)),
            })
        }

        Tag::Paragraph => {
            let mut inlines = collect_inlines(element)?;
            trim_inlines(&mut inlines);
            if inlines_are_blank(&inlines) {
                Ok(None)
            } else {
                escape_block_start(&mut inlines);
                Ok(Some(Block::Paragraph(inlines)))
            }
        }

        Tag::Heading(level) => {
            let mut inlines = collect_inlines(element)?;
            trim_inlines(&mut inlines);
            if inlines_are_blank(&inlines) {
                Ok(None)
            } else {
                Ok(Some(Block::Heading {
                    level: *level,
                    content: inlines,
                }))
            }
        }

        Tag::BlockQuote => {
            let blocks = convert_children(&element.children, tag)?;
            Ok((!blocks.is_empty()).then_some(Block::BlockQuote(blocks)))
        }

        Tag::UnorderedList | Tag::OrderedList => {
            let ordered = *tag == Tag::OrderedList;
            let start = element
                .attr("start")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(1);
            let items = collect_list_items(element)?;
            if items.is_empty() {
                Ok(None)
            } else {
                Ok(Some(Block::List {
                    ordered,
                    start,
                    items,
                }))
            }
        }

        Tag::Preformatted => Ok(Some(convert_code_block(element))),

        Tag::ThematicBreak => Ok(Some(Block::ThematicBreak)),

        // Inline-only elements at block level get their own paragraph
        Tag::Emphasis
        | Tag::Strong
        | Tag::Code
        | Tag::Span
        | Tag::Link
        | Tag::Image
        | Tag::LineBreak => {
            let mut inlines = Vec::new();
            push_inline_element(element, &mut inlines)?;
            trim_inlines(&mut inlines);
            Ok((!inlines_are_blank(&inlines)).then_some(Block::Paragraph(inlines)))
        }

        Tag::ListItem => Err(misplaced(tag.name(), parent)),

        Tag::Table
        | Tag::TableSection
        | Tag::TableRow
        | Tag::TableCell { .. }
        | Tag::Strikethrough
        | Tag::Underline
        | Tag::Subscript
        | Tag::Superscript
        | Tag::Unknown(_) => Err(unsupported(tag)),
    }
}

/// Collect list items from ul/ol, skipping blank items
fn collect_list_items(list: &Element) -> ModelResult<Vec<ListItem>> {
    let mut items = Vec::new();

    for child in &list.children {
        match child {
            Node::Text(text) if text.value.trim().is_empty() => {}
            Node::Text(_) => return Err(misplaced("#text", &list.tag)),
            Node::Element(element) if element.tag == Tag::ListItem => {
                let item = ListItem::new(convert_children(&element.children, &element.tag)?);
                if !item.is_blank() {
                    items.push(item);
                }
            }
            Node::Element(element) => return Err(misplaced(element.tag.name(), &list.tag)),
        }
    }

    Ok(items)
}

fn convert_code_block(pre: &Element) -> Block {
    let code = pre.element_children().find(|c| c.tag == Tag::Code);

    let language = code.and_then(|c| c.attr("class")).and_then(|class| {
        class
            .split_whitespace()
            .find_map(|c| c.strip_prefix("language-"))
            .map(str::to_string)
    });

    Block::CodeBlock {
        language,
        code: code.map_or_else(|| pre.text_content(), Element::text_content),
    }
}

/// Collect inline content from an element's children
fn collect_inlines(element: &Element) -> ModelResult<Vec<Inline>> {
    let mut inlines = Vec::new();

    for child in &element.children {
        match child {
            Node::Text(text) => push_text(text, &mut inlines),
            Node::Element(child) => push_inline_element(child, &mut inlines)?,
        }
    }

    Ok(inlines)
}

fn push_text(text: &Text, out: &mut Vec<Inline>) {
    if text.verbatim {
        out.push(Inline::Raw(text.value.clone()));
        return;
    }

    let collapsed = collapse_whitespace(&text.value);
    if !collapsed.is_empty() {
        out.push(Inline::Text(escape_markdown(&collapsed)));
    }
}

/// Convert an element in inline context, appending to `out`
fn push_inline_element(element: &Element, out: &mut Vec<Inline>) -> ModelResult<()> {
    let tag = &element.tag;

    match tag {
        Tag::Strong => {
            let inner = collect_inlines(element)?;
            if !inlines_are_blank(&inner) {
                out.push(Inline::Strong(inner));
            }
        }

        Tag::Emphasis => {
            let inner = collect_inlines(element)?;
            if !inlines_are_blank(&inner) {
                out.push(Inline::Emphasis(inner));
            }
        }

        Tag::Code => {
            let text = element.text_content();
            if !text.is_empty() {
                out.push(Inline::Code(text));
            }
        }

        Tag::Link => {
            let href = element.attr("href").unwrap_or("").trim();
            let title = element.attr("title").map(str::to_string);
            let content = collect_inlines(element)?;

            if href.is_empty() && title.is_none() {
                // No link target, just keep the content
                out.extend(content);
            } else {
                out.push(Inline::Link {
                    content,
                    url: href.to_string(),
                    title,
                });
            }
        }

        Tag::Image => {
            let src = element.attr("src").unwrap_or("").trim();
            if !src.is_empty() {
                out.push(Inline::Image {
                    alt: element.attr("alt").unwrap_or("").to_string(),
                    url: src.to_string(),
                    title: element.attr("title").map(str::to_string),
                });
            }
        }

        Tag::LineBreak => out.push(Inline::LineBreak),

        // Pass-through inline container
        Tag::Span => out.extend(collect_inlines(element)?),

        // Block elements inside inline context contribute their inline content
        Tag::Root
        | Tag::Heading(_)
        | Tag::Paragraph
        | Tag::UnorderedList
        | Tag::OrderedList
        | Tag::BlockQuote
        | Tag::Preformatted
        | Tag::Division => out.extend(collect_inlines(element)?),

        Tag::ThematicBreak => {}

        Tag::ListItem => return Err(misplaced(tag.name(), &Tag::Span)),

        Tag::Table
        | Tag::TableSection
        | Tag::TableRow
        | Tag::TableCell { .. }
        | Tag::Strikethrough
        | Tag::Underline
        | Tag::Subscript
        | Tag::Superscript
        | Tag::Unknown(_) => return Err(unsupported(tag)),
    }

    Ok(())
}

/// Drop leading and trailing whitespace of a run of inlines
fn trim_inlines(inlines: &mut Vec<Inline>) {
    if let Some(Inline::Text(first)) = inlines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        *last = last.trim_end().to_string();
    }
    inlines.retain(|i| !matches!(i, Inline::Text(t) if t.is_empty()));
}

/// Escape characters that would open a block construct at the start of a
/// paragraph: `#`, `>`, `+`, `-` and ordered list markers like `1.`
fn escape_block_start(inlines: &mut [Inline]) {
    let Some(Inline::Text(text)) = inlines.first_mut() else {
        return;
    };

    if text.starts_with(['#', '>', '+', '-']) {
        text.insert(0, '\\');
        return;
    }

    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && text[digits..].starts_with(['.', ')']) {
        text.insert(digits, '\\');
    }
}

/// Collapse whitespace in text
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Escape inline markdown special characters in text
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' | '*' | '_' | '[' | ']' | '`' | '~' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
