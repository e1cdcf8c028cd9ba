//! Whitespace normalization transforms.
//!
//! Tweets carry newlines, tabs and the occasional non-breaking or ideographic
//! space. Training data wants one line per tweet with single spaces.

use super::TextTransform;

/// Collapses every run of whitespace (any Unicode `White_Space`, newlines
/// included) into a single ASCII space.
pub struct NormalizeWhitespace;

impl TextTransform for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    fn transform(&self, text: &mut String) {
        let mut result = String::with_capacity(text.len());
        let mut prev_space = false;

        for c in text.chars() {
            if c.is_whitespace() {
                if !prev_space {
                    result.push(' ');
                    prev_space = true;
                }
            } else {
                prev_space = false;
                result.push(c);
            }
        }
        *text = result;
    }
}

/// Strips leading and trailing whitespace.
pub struct TrimWhitespace;

impl TextTransform for TrimWhitespace {
    fn name(&self) -> &'static str {
        "trim_whitespace"
    }

    fn transform(&self, text: &mut String) {
        let end = text.trim_end().len();
        text.truncate(end);
        let start = text.len() - text.trim_start().len();
        text.drain(..start);
    }
}
