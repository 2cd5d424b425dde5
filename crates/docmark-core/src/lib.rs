//! docmark-core - Markdown document model and serialization
//!
//! This crate provides the intermediate Markdown document model and the
//! serializer that turns it into text. It is used by `docmark`, which lowers
//! its document tree into this model before serializing.
//!
//! # Architecture
//!
//! ```text
//!                     ┌──────────────────┐
//! Document Tree ────▶ │ Markdown model   │ ──▶ Markdown String
//!   (docmark)         │ (Block / Inline) │
//!                     └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use docmark_core::{Block, Inline, Options, serialize};
//!
//! let ast = Block::Document(vec![
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::Text("Hello World".to_string())],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::Text("This is ".to_string()),
//!         Inline::Strong(vec![Inline::Text("bold".to_string())]),
//!         Inline::Text(" text.".to_string()),
//!     ]),
//! ]);
//!
//! let markdown = serialize(&ast, &Options::default());
//! assert_eq!(markdown, "# Hello World\n\nThis is **bold** text.");
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{inlines_are_blank, inlines_plain_text, Block, Inline, ListItem};
pub use options::{CodeBlockStyle, HeadingStyle, Options};
pub use serialize::serialize;
