//! Text cleaning transforms.
//!
//! Each transform is one rewrite of a tweet body. A [`TextCleaner`] runs an
//! ordered chain of them; the order matters because every rewrite narrows
//! what the later ones can match.

mod entities;
mod normalize;

use std::fmt;
use std::sync::LazyLock;

pub use entities::{StripLeadingMentions, StripRetweetMeta, StripTrailingHashtags, StripUrls};
pub use normalize::{NormalizeWhitespace, TrimWhitespace};

/// A single in-place rewrite of a text.
///
/// Implementations must be total: any input string, including the empty
/// string, produces some output.
pub trait TextTransform: Send + Sync {
    /// Short name for debug output.
    fn name(&self) -> &'static str;

    fn transform(&self, text: &mut String);
}

/// Ordered chain of [`TextTransform`]s.
///
/// [`clean`](Self::clean) runs the chain exactly once. A rewrite can expose a
/// pattern for an earlier one (a URL in front of a reply mention, a nested
/// `RT @handle: `); those are left in place unless the caller asks for
/// [`clean_to_fixed_point`](Self::clean_to_fixed_point).
pub struct TextCleaner {
    transforms: Vec<Box<dyn TextTransform>>,
}

impl TextCleaner {
    /// Build a cleaner from an explicit chain.
    pub fn with_transforms(transforms: Vec<Box<dyn TextTransform>>) -> Self {
        Self { transforms }
    }

    /// The standard tweet chain:
    ///
    /// 1. collapse whitespace
    /// 2. strip a leading `RT @handle: `
    /// 3. strip URLs
    /// 4. strip leading `@mentions`
    /// 5. strip trailing `#hashtags`
    /// 6. collapse whitespace again and trim
    pub fn standard() -> Self {
        Self::with_transforms(vec![
            Box::new(NormalizeWhitespace),
            Box::new(StripRetweetMeta),
            Box::new(StripUrls),
            Box::new(StripLeadingMentions),
            Box::new(StripTrailingHashtags),
            Box::new(NormalizeWhitespace),
            Box::new(TrimWhitespace),
        ])
    }

    /// Append a transform to the end of the chain.
    pub fn push<T: TextTransform + 'static>(&mut self, transform: T) {
        self.transforms.push(Box::new(transform));
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run the chain once, in order.
    pub fn apply_once(&self, text: &mut String) {
        for transform in &self.transforms {
            transform.transform(text);
        }
    }

    /// Clean `text` with a single pass of the chain.
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        self.apply_once(&mut cleaned);
        cleaned
    }

    /// Re-run the chain until a pass no longer shrinks the text.
    ///
    /// After the first pass only removals are left to do, so the loop ends.
    pub fn clean_to_fixed_point(&self, text: &str) -> String {
        let mut current = self.clean(text);
        loop {
            let mut next = current.clone();
            self.apply_once(&mut next);
            if next.len() >= current.len() {
                return current;
            }
            current = next;
        }
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.transforms.iter().map(|t| t.name()))
            .finish()
    }
}

static STANDARD_CLEANER: LazyLock<TextCleaner> = LazyLock::new(TextCleaner::standard);

/// Clean a tweet body with the standard chain.
///
/// Never fails; an empty or all-noise body cleans to `""`.
pub fn clean_text(text: &str) -> String {
    STANDARD_CLEANER.clean(text)
}
