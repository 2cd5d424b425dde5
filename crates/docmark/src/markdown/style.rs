//! Recognizes the emphasis a `style` attribute asks for.
//!
//! Only two declarations are understood: `font-weight: bold` (or `700`) and
//! `font-style: italic`. Everything else in the attribute is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*font-weight\s*:\s*(?:bold|700)\s*(?:!important\s*)?(?:;|$)")
        .expect("bold style pattern")
});

static ITALIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*font-style\s*:\s*italic\s*(?:!important\s*)?(?:;|$)")
        .expect("italic style pattern")
});

/// Emphasis requested by a style attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleEmphasis {
    Strong,
    Emphasis,
}

/// Classify a style string. Bold wins when both are present.
pub fn style_emphasis(style: &str) -> Option<StyleEmphasis> {
    if BOLD.is_match(style) {
        Some(StyleEmphasis::Strong)
    } else if ITALIC.is_match(style) {
        Some(StyleEmphasis::Emphasis)
    } else {
        None
    }
}
