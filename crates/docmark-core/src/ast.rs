//! Markdown document model
//!
//! The intermediate representation handed to the serializer. It only holds
//! constructs Markdown can express natively: there is no table, no
//! strikethrough and no underline here. Producers that need those must lower
//! them first.

/// A block-level Markdown node
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Root document container
    Document(Vec<Block>),

    /// Heading with level (1-6) and inline content
    Heading {
        level: u8,
        content: Vec<Inline>,
    },

    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),

    /// Block quote containing nested blocks
    BlockQuote(Vec<Block>),

    /// List (ordered or unordered)
    List {
        ordered: bool,
        start: u32,
        items: Vec<ListItem>,
    },

    /// Fenced or indented code block
    CodeBlock {
        language: Option<String>,
        code: String,
    },

    /// Thematic break (horizontal rule)
    ThematicBreak,

    /// Markdown that was produced upstream and is emitted untouched
    Raw(String),
}

/// A list item containing blocks
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: Vec<Block>,
}

impl ListItem {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            content: vec![Block::Paragraph(inlines)],
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.iter().all(|b| b.is_blank())
    }
}

/// An inline Markdown node
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Plain text, already escaped by the producer
    Text(String),

    /// Strong emphasis (bold)
    Strong(Vec<Inline>),

    /// Emphasis (italic)
    Emphasis(Vec<Inline>),

    /// Inline code
    Code(String),

    /// Link with text, URL, and optional title
    Link {
        content: Vec<Inline>,
        url: String,
        title: Option<String>,
    },

    /// Image with alt text, URL, and optional title
    Image {
        alt: String,
        url: String,
        title: Option<String>,
    },

    /// Hard line break
    LineBreak,

    /// Inline Markdown emitted untouched
    Raw(String),
}

impl Block {
    /// Check if this block is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Block::Document(blocks) | Block::BlockQuote(blocks) => {
                blocks.iter().all(|b| b.is_blank())
            }
            Block::Paragraph(inlines) => inlines_are_blank(inlines),
            Block::Heading { content, .. } => inlines_are_blank(content),
            Block::List { items, .. } => items.iter().all(|i| i.is_blank()),
            Block::CodeBlock { code, .. } => code.trim().is_empty(),
            Block::ThematicBreak => false,
            Block::Raw(text) => text.trim().is_empty(),
        }
    }
}

impl Inline {
    /// Check if this inline is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) | Inline::Raw(text) => text.trim().is_empty(),
            Inline::Strong(inlines) | Inline::Emphasis(inlines) => inlines_are_blank(inlines),
            Inline::Code(code) => code.is_empty(),
            Inline::Link { content, .. } => inlines_are_blank(content),
            Inline::Image { .. } => false,
            Inline::LineBreak => false,
        }
    }

    /// Plain text of this inline with all markup dropped
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) | Inline::Raw(text) | Inline::Code(text) => text.clone(),
            Inline::Strong(inlines) | Inline::Emphasis(inlines) => inlines_plain_text(inlines),
            Inline::Link { content, .. } => inlines_plain_text(content),
            Inline::Image { alt, .. } => alt.clone(),
            Inline::LineBreak => "\n".to_string(),
        }
    }
}

/// Check if every inline in the slice is blank
pub fn inlines_are_blank(inlines: &[Inline]) -> bool {
    inlines.iter().all(|i| i.is_blank())
}

/// Concatenated plain text of an inline sequence
pub fn inlines_plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::plain_text).collect()
}
