//! tweetext - clean tweet texts for language-model training data.
//!
//! The core is [`extract`]: a classification filter plus an ordered chain of
//! text rewrites (whitespace, retweet headers, links, reply mentions,
//! trailing hashtags). [`batch`] feeds CSV exports through it and writes one
//! text per line.
//!
//! ```
//! use tweetext::extract::extract_tweet_texts;
//! use tweetext::tweet::Tweet;
//!
//! let tweets = vec![
//!     Tweet::new("retweet", "RT @jack: hello"),
//!     Tweet::new("original", "Hey #bitcoin lovers, whats up? #bored #bitcoin"),
//! ];
//! let texts: Vec<String> = extract_tweet_texts(&tweets, true, false).collect();
//! assert_eq!(texts, vec!["Hey #bitcoin lovers, whats up?"]);
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod extract;
pub mod logging;
pub mod tweet;

pub use config::Config;
