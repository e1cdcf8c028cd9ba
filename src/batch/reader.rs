//! CSV tweet export reader.
//!
//! Exports must have a header row with at least `text` and `tweet_type`
//! columns; anything else in the row is ignored. A missing column or an
//! unreadable row rejects the whole file rather than feeding partial data
//! into training.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::BatchError;
use crate::tweet::Tweet;

/// Columns every export must provide.
pub const REQUIRED_COLUMNS: [&str; 2] = ["text", "tweet_type"];

/// Read all tweets from a CSV export on disk.
pub fn read_tweets_from_path(path: &Path) -> Result<Vec<Tweet>, BatchError> {
    let file = File::open(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_tweets(file, path)
}

/// Read all tweets from CSV data. `source` only labels errors.
pub fn read_tweets<R: Read>(reader: R, source: &Path) -> Result<Vec<Tweet>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| malformed(source, e, 1))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BatchError::MissingColumn {
                path: source.to_path_buf(),
                column,
            });
        }
    }

    let mut tweets = Vec::new();
    for (index, result) in csv_reader.deserialize::<Tweet>().enumerate() {
        // Header is line 1; fallback only matters for errors without a position
        let tweet = result.map_err(|e| malformed(source, e, index as u64 + 2))?;
        tweets.push(tweet);
    }
    Ok(tweets)
}

fn malformed(path: &Path, source: csv::Error, fallback_line: u64) -> BatchError {
    let line = source
        .position()
        .map(|pos| pos.line())
        .unwrap_or(fallback_line);
    BatchError::MalformedRecord {
        path: path.to_path_buf(),
        line,
        source,
    }
}
