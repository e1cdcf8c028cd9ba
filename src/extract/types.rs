//! Data structures reported by the extraction pipeline.

use std::fmt;
use std::ops::AddAssign;

/// Counts from one pass of the pipeline over a batch of tweets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Tweets read from the source
    pub records: usize,
    /// Tweets left after classification filtering
    pub retained: usize,
    /// Non-blank texts emitted after cleaning
    pub emitted: usize,
}

impl ExtractionStats {
    /// Retained tweets whose text cleaned down to nothing.
    pub fn blank(&self) -> usize {
        self.retained.saturating_sub(self.emitted)
    }
}

impl AddAssign for ExtractionStats {
    fn add_assign(&mut self, other: Self) {
        self.records += other.records;
        self.retained += other.retained;
        self.emitted += other.emitted;
    }
}

impl fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tweets, {} after filtering, {} non-blank texts",
            self.records, self.retained, self.emitted
        )
    }
}
