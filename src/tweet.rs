//! Tweet records as they appear in a CSV export.

use std::fmt;

use serde::Deserialize;

/// Classification of a tweet.
///
/// The four known tags are `original`, `retweet`, `reply` and `quote`.
/// Anything else is kept as [`TweetType::Unrecognized`] rather than failing
/// the whole batch, so filtering can drop it quietly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum TweetType {
    Original,
    Retweet,
    Reply,
    Quote,
    Unrecognized(String),
}

impl TweetType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "original" => TweetType::Original,
            "retweet" => TweetType::Retweet,
            "reply" => TweetType::Reply,
            "quote" => TweetType::Quote,
            other => TweetType::Unrecognized(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            TweetType::Original => "original",
            TweetType::Retweet => "retweet",
            TweetType::Reply => "reply",
            TweetType::Quote => "quote",
            TweetType::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for TweetType {
    fn from(tag: String) -> Self {
        match TweetType::from_tag(&tag) {
            TweetType::Unrecognized(_) => TweetType::Unrecognized(tag),
            known => known,
        }
    }
}

impl From<&str> for TweetType {
    fn from(tag: &str) -> Self {
        TweetType::from_tag(tag)
    }
}

impl fmt::Display for TweetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A single tweet: raw body plus its classification.
///
/// Other columns of the export (ids, timestamps, counts) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tweet {
    pub text: String,
    pub tweet_type: TweetType,
}

impl Tweet {
    pub fn new(tweet_type: impl Into<TweetType>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tweet_type: tweet_type.into(),
        }
    }
}
