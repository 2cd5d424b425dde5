//! Converter - the main entry point for tree to HTML/Markdown conversion.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::hast::{HastProducer, TreeProducer};
use crate::html::to_html;
use crate::markdown::{convert_markdown, ModelError};
use crate::node::Node;
use crate::{Error, Result};

pub use docmark_core::{CodeBlockStyle, HeadingStyle, Options as MarkdownOptions};

/// Output format of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Markdown,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "md",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "md" | "markdown" => Ok(Format::Markdown),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// What to do when a tree cannot be converted structurally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackStrategy {
    /// Rebuild headings, paragraphs, lists and tables from the original tree
    #[default]
    Structured,
    /// Extract all text and promote short title-like lines to headings
    PlainText,
}

/// Options for the conversion pipeline
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub markdown: MarkdownOptions,
    pub fallback: FallbackStrategy,
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub output: String,
    /// Set when the Markdown fallback produced `output`
    pub warning: Option<ModelError>,
}

impl Conversion {
    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }
}

/// The main service for converting document trees
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a tree to the requested format. The tree is not modified.
    pub fn convert(&self, node: &Node, format: Format) -> Conversion {
        debug!("converting to {format}");
        match format {
            Format::Html => Conversion {
                output: self.to_html(node),
                warning: None,
            },
            Format::Markdown => self.to_markdown(node),
        }
    }

    /// Convert a tree to Markdown, falling back to text reconstruction
    pub fn to_markdown(&self, node: &Node) -> Conversion {
        convert_markdown(node, &self.options)
    }

    /// Serialize a tree as HTML
    pub fn to_html(&self, node: &Node) -> String {
        to_html(node)
    }

    /// Parse a hast JSON document and convert it
    pub fn convert_source(&self, source: &str, format: Format) -> Result<Conversion> {
        let node = HastProducer::new().produce(source)?;
        Ok(self.convert(&node, format))
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}
