//! Element vocabulary of the document tree.

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Check if a tag name is a void element
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name.to_lowercase().as_str())
}

/// The kind of an element.
///
/// Aliases collapse onto one variant (`i` and `em` are both [`Tag::Emphasis`]);
/// anything outside the vocabulary is kept as [`Tag::Unknown`] with its
/// lower-cased name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Tree root, renders only its children
    Root,
    /// `h1` to `h6`
    Heading(u8),
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    /// `thead`, `tbody` or `tfoot`
    TableSection,
    TableRow,
    /// `th` when `header` is set, `td` otherwise
    TableCell { header: bool },
    Emphasis,
    Strong,
    Strikethrough,
    Underline,
    Subscript,
    Superscript,
    /// Generic inline container
    Span,
    Link,
    Image,
    LineBreak,
    ThematicBreak,
    BlockQuote,
    Code,
    Preformatted,
    /// `div` and the sectioning containers
    Division,
    Unknown(String),
}

impl Tag {
    /// Resolve an element name, case-insensitively
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "root" => Tag::Root,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Tag::Heading(name.as_bytes()[1] - b'0'),
            "p" => Tag::Paragraph,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "table" => Tag::Table,
            "thead" | "tbody" | "tfoot" => Tag::TableSection,
            "tr" => Tag::TableRow,
            "th" => Tag::TableCell { header: true },
            "td" => Tag::TableCell { header: false },
            "em" | "i" => Tag::Emphasis,
            "strong" | "b" => Tag::Strong,
            "s" | "del" | "strike" => Tag::Strikethrough,
            "u" => Tag::Underline,
            "sub" => Tag::Subscript,
            "sup" => Tag::Superscript,
            "span" => Tag::Span,
            "a" => Tag::Link,
            "img" => Tag::Image,
            "br" => Tag::LineBreak,
            "hr" => Tag::ThematicBreak,
            "blockquote" => Tag::BlockQuote,
            "code" => Tag::Code,
            "pre" => Tag::Preformatted,
            "div" | "section" | "article" | "main" | "aside" | "header" | "footer" | "nav"
            | "body" => Tag::Division,
            _ => Tag::Unknown(name),
        }
    }

    /// Canonical HTML element name
    pub fn name(&self) -> &str {
        match self {
            Tag::Root => "root",
            Tag::Heading(level) => match level {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            Tag::Paragraph => "p",
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::Table => "table",
            Tag::TableSection => "tbody",
            Tag::TableRow => "tr",
            Tag::TableCell { header: true } => "th",
            Tag::TableCell { header: false } => "td",
            Tag::Emphasis => "em",
            Tag::Strong => "strong",
            Tag::Strikethrough => "s",
            Tag::Underline => "u",
            Tag::Subscript => "sub",
            Tag::Superscript => "sup",
            Tag::Span => "span",
            Tag::Link => "a",
            Tag::Image => "img",
            Tag::LineBreak => "br",
            Tag::ThematicBreak => "hr",
            Tag::BlockQuote => "blockquote",
            Tag::Code => "code",
            Tag::Preformatted => "pre",
            Tag::Division => "div",
            Tag::Unknown(name) => name,
        }
    }

    /// `ul` or `ol`
    pub fn is_list(&self) -> bool {
        matches!(self, Tag::UnorderedList | Tag::OrderedList)
    }
}
