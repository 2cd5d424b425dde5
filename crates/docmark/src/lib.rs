//! # docmark
//!
//! Convert document trees to HTML or Markdown.
//!
//! The input is an HTML-like document tree, usually built from a
//! [hast](https://github.com/syntax-tree/hast) JSON document. HTML output is a
//! direct rendering of the tree. Markdown output degrades gracefully:
//!
//! 1. a normalized copy of the tree rewrites constructs Markdown lacks
//!    (strikethrough, underline, sub/superscript, styled spans, tables);
//! 2. the normalized tree is converted to a Markdown document model;
//! 3. if that fails, the original tree is rebuilt as text block by block.
//!
//! Markdown conversion never fails. When the fallback ran, the returned
//! [`Conversion`] carries the reason as a warning.
//!
//! ## Example
//!
//! ```rust
//! use docmark::{Converter, Format, Node};
//!
//! let tree = Node::root()
//!     .with_child(Node::element("h1").with_text("Hello World"))
//!     .with_child(
//!         Node::element("p")
//!             .with_text("Some ")
//!             .with_child(Node::element("s").with_text("old")),
//!     );
//!
//! let converter = Converter::new();
//! let markdown = converter.convert(&tree, Format::Markdown);
//! assert_eq!(markdown.output, "# Hello World\n\nSome ~~old~~");
//!
//! let html = converter.convert(&tree, Format::Html);
//! assert_eq!(html.output, "<h1>Hello World</h1><p>Some <s>old</s></p>");
//! ```

pub mod hast;
pub mod html;
pub mod markdown;
pub mod node;
mod service;
pub mod tag;

pub use hast::{HastProducer, TreeProducer};
pub use html::to_html;
pub use markdown::ModelError;
pub use node::{Element, Node, Text};
pub use service::{
    CodeBlockStyle, Conversion, ConvertOptions, Converter, FallbackStrategy, Format,
    HeadingStyle, MarkdownOptions,
};
pub use tag::Tag;

/// Error type for docmark operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid input: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
