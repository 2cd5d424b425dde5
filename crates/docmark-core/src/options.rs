//! Configuration options for Markdown serialization

/// Heading style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// Use ATX-style headings (prefixed with #)
    #[default]
    Atx,
    /// Use setext-style headings (underlined with = or -)
    /// Only works for h1 and h2, falls back to ATX for h3-h6
    Setext,
}

/// Code block style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeBlockStyle {
    /// Use fenced code blocks (```)
    #[default]
    Fenced,
    /// Use indented code blocks (4 spaces)
    Indented,
}

/// Options for Markdown serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Heading style (atx or setext)
    pub heading_style: HeadingStyle,

    /// Horizontal rule string
    pub hr: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Code block style
    pub code_block_style: CodeBlockStyle,

    /// Fence string for fenced code blocks
    pub fence: String,

    /// Number ordered list items `1.`, `2.`, `3.` instead of repeating the start
    pub increment_list_marker: bool,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Atx,
            hr: "***".to_string(),
            bullet_list_marker: '-',
            code_block_style: CodeBlockStyle::Fenced,
            fence: "```".to_string(),
            increment_list_marker: true,
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
        }
    }
}
