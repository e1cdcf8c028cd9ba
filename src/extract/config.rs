//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Which tweet classifications to drop before cleaning.
///
/// Originals and quote tweets are always kept; these switches only cover
/// retweets and replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Drop retweets (default: true)
    pub remove_retweets: bool,
    /// Drop replies (default: false)
    pub remove_replies: bool,
}

impl ExtractionConfig {
    pub fn new(remove_retweets: bool, remove_replies: bool) -> Self {
        Self {
            remove_retweets,
            remove_replies,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            remove_retweets: true,
            remove_replies: false,
        }
    }
}
