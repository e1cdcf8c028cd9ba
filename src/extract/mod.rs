//! Tweet text extraction pipeline.
//!
//! Turns classified tweets into clean, single-line training texts:
//!
//! ```text
//! tweets -> TypeFilter -> TextCleaner (per tweet) -> drop blanks -> texts
//! ```
//!
//! Everything here is pure. Reading CSV exports and writing output lines
//! lives in [`crate::batch`].
//!
//! # Module Structure
//!
//! - [`config`] - Which classifications to drop
//! - [`filter`] - Classification filter
//! - [`transforms`] - Individual text rewrites and the cleaning chain
//! - [`extractor`] - Pipeline orchestration
//! - [`types`] - Per-batch counts

mod config;
mod extractor;
mod filter;
mod transforms;
mod types;

// Re-export main types
pub use config::ExtractionConfig;
pub use extractor::{extract_tweet_texts, TweetExtractor};
pub use filter::{filter_by_tweet_types, TypeFilter};
pub use transforms::{
    clean_text, NormalizeWhitespace, StripLeadingMentions, StripRetweetMeta,
    StripTrailingHashtags, StripUrls, TextCleaner, TextTransform, TrimWhitespace,
};
pub use types::ExtractionStats;
