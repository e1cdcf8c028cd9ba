//! Pipeline orchestration: classification filter, text cleaning, blank
//! suppression.

use std::borrow::Borrow;
use std::sync::Arc;

use super::config::ExtractionConfig;
use super::filter::TypeFilter;
use super::transforms::TextCleaner;
use super::types::ExtractionStats;
use crate::tweet::Tweet;

/// Turns tweets into clean training lines.
///
/// Stateless between calls; one extractor can serve any number of batches,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct TweetExtractor {
    filter: TypeFilter,
    cleaner: Arc<TextCleaner>,
}

impl TweetExtractor {
    /// Create an extractor with the standard cleaning chain.
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            filter: TypeFilter::from(config),
            cleaner: Arc::new(TextCleaner::standard()),
        }
    }

    /// Replace the cleaning chain.
    pub fn with_cleaner(mut self, cleaner: TextCleaner) -> Self {
        self.cleaner = Arc::new(cleaner);
        self
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// Lazily extract clean texts.
    ///
    /// Single pass: tweets are pulled from `tweets` only as the returned
    /// iterator is advanced. Output order follows input order; texts that
    /// clean to nothing are skipped.
    pub fn extract<I, T>(&self, tweets: I) -> impl Iterator<Item = String>
    where
        I: IntoIterator<Item = T>,
        T: Borrow<Tweet>,
    {
        let cleaner = Arc::clone(&self.cleaner);
        self.filter
            .filter(tweets)
            .map(move |tweet| cleaner.clean(&Borrow::<Tweet>::borrow(&tweet).text))
            .filter(|text| !text.is_empty())
    }

    /// Extract all texts at once, counting what each stage let through.
    pub fn extract_with_stats<I, T>(&self, tweets: I) -> (Vec<String>, ExtractionStats)
    where
        I: IntoIterator<Item = T>,
        T: Borrow<Tweet>,
    {
        let mut records = 0;
        let retained: Vec<T> = self
            .filter
            .filter(tweets.into_iter().inspect(|_| records += 1))
            .collect();

        let texts: Vec<String> = retained
            .iter()
            .map(|tweet| self.cleaner.clean(&Borrow::<Tweet>::borrow(tweet).text))
            .filter(|text| !text.is_empty())
            .collect();

        let stats = ExtractionStats {
            records,
            retained: retained.len(),
            emitted: texts.len(),
        };
        (texts, stats)
    }
}

impl Default for TweetExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

/// Filter, clean and drop blanks with the standard cleaning chain.
pub fn extract_tweet_texts<I, T>(
    tweets: I,
    remove_retweets: bool,
    remove_replies: bool,
) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = T>,
    T: Borrow<Tweet>,
{
    TweetExtractor::new(&ExtractionConfig::new(remove_retweets, remove_replies)).extract(tweets)
}
