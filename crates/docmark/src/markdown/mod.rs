//! Markdown conversion pipeline.
//!
//! A tree is first normalized and handed to the structural converter. When
//! that fails, the original tree is rebuilt as text by the configured
//! fallback strategy. The pipeline always produces output.

mod fallback;
mod list;
mod normalize;
mod structural;
mod style;
mod table;

pub use fallback::{plain_text_fallback, structured_fallback};
pub use list::transcode_list;
pub use normalize::normalize;
pub use structural::{convert_structural, to_document, ModelError, ModelResult};
pub use style::{style_emphasis, StyleEmphasis};
pub use table::{transcode_table, EMPTY_TABLE};

use log::{debug, warn};

use crate::node::Node;
use crate::service::{Conversion, ConvertOptions, FallbackStrategy};

/// Run the full pipeline on `node`, which is left untouched
pub fn convert_markdown(node: &Node, options: &ConvertOptions) -> Conversion {
    let normalized = normalize(node.clone());

    match convert_structural(&normalized, &options.markdown) {
        Ok(output) => {
            debug!("structural conversion succeeded");
            Conversion {
                output,
                warning: None,
            }
        }
        Err(err) => {
            warn!("structural conversion failed, using {:?} fallback: {err}", options.fallback);
            let output = match options.fallback {
                FallbackStrategy::Structured => structured_fallback(node),
                FallbackStrategy::PlainText => plain_text_fallback(node),
            };
            Conversion {
                output,
                warning: Some(err),
            }
        }
    }
}
