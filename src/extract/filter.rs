//! Classification filter.
//!
//! Decides per tweet whether it goes on to cleaning. Order of the input is
//! preserved and nothing is duplicated.

use std::borrow::Borrow;

use tracing::debug;

use super::config::ExtractionConfig;
use crate::tweet::{Tweet, TweetType};

/// Keeps or drops tweets by classification.
///
/// - `original` and `quote`: always kept
/// - `retweet`: kept unless `remove_retweets`
/// - `reply`: kept unless `remove_replies`
/// - anything else: dropped, without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeFilter {
    remove_retweets: bool,
    remove_replies: bool,
}

impl TypeFilter {
    pub fn new(remove_retweets: bool, remove_replies: bool) -> Self {
        Self {
            remove_retweets,
            remove_replies,
        }
    }

    pub fn remove_retweets(&self) -> bool {
        self.remove_retweets
    }

    pub fn remove_replies(&self) -> bool {
        self.remove_replies
    }

    /// Whether a tweet of this classification is kept.
    pub fn retains(&self, tweet_type: &TweetType) -> bool {
        match tweet_type {
            TweetType::Original | TweetType::Quote => true,
            TweetType::Retweet => !self.remove_retweets,
            TweetType::Reply => !self.remove_replies,
            TweetType::Unrecognized(_) => false,
        }
    }

    /// Lazily filter a sequence of tweets, owned or borrowed.
    pub fn filter<I, T>(self, tweets: I) -> impl Iterator<Item = T>
    where
        I: IntoIterator<Item = T>,
        T: Borrow<Tweet>,
    {
        tweets.into_iter().filter(move |tweet| {
            let tweet_type = &Borrow::<Tweet>::borrow(tweet).tweet_type;
            if let TweetType::Unrecognized(tag) = tweet_type {
                debug!(tweet_type = %tag, "Dropping tweet with unrecognized classification");
            }
            self.retains(tweet_type)
        })
    }
}

impl From<&ExtractionConfig> for TypeFilter {
    fn from(config: &ExtractionConfig) -> Self {
        Self::new(config.remove_retweets, config.remove_replies)
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::from(&ExtractionConfig::default())
    }
}

/// Filter tweets by classification, keeping input order.
pub fn filter_by_tweet_types(
    tweets: &[Tweet],
    remove_retweets: bool,
    remove_replies: bool,
) -> Vec<&Tweet> {
    TypeFilter::new(remove_retweets, remove_replies)
        .filter(tweets)
        .collect()
}
