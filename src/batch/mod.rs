//! Batch driver: feeds CSV exports through the extraction pipeline.
//!
//! The input is either a single export or a directory of them. Texts go
//! either to one stream (stdout for the CLI) or to one `.txt` per export
//! in a destination directory.

mod error;
mod reader;
mod sink;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::extract::{ExtractionStats, TweetExtractor};

pub use error::BatchError;
pub use reader::{read_tweets, read_tweets_from_path, REQUIRED_COLUMNS};
pub use sink::{ensure_dir, output_path, write_file, write_lines, OutputTarget};

/// Outcome for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    /// Written file, or `None` when texts went to the stream
    pub destination: Option<PathBuf>,
    pub stats: ExtractionStats,
}

/// Resolve the input path into the list of exports to process.
///
/// A file is taken as-is. A directory yields its `*.csv` entries (not
/// recursive), sorted by path.
pub fn discover_inputs(input: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(BatchError::InvalidInput {
            path: input.to_path_buf(),
        });
    }

    let entries = fs::read_dir(input).map_err(|source| BatchError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| BatchError::Read {
                path: input.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();

    info!("Found {} CSV files in: {}", files.len(), input.display());
    if files.is_empty() {
        warn!("Nothing to extract in {}", input.display());
    }
    Ok(files)
}

/// Runs the extractor over every input and routes the texts.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    extractor: TweetExtractor,
    target: OutputTarget,
}

impl BatchDriver {
    pub fn new(extractor: TweetExtractor, target: OutputTarget) -> Self {
        Self { extractor, target }
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Process `input` (file or directory).
    ///
    /// With [`OutputTarget::Stream`] all texts go to `stream`, file by file in
    /// sorted order. With [`OutputTarget::Directory`] `stream` is untouched
    /// and files are processed in parallel.
    pub fn run<W: Write + ?Sized>(
        &self,
        input: &Path,
        stream: &mut W,
    ) -> Result<Vec<FileReport>, BatchError> {
        let files = discover_inputs(input)?;
        match &self.target {
            OutputTarget::Stream => self.run_to_stream(&files, stream),
            OutputTarget::Directory(destdir) => self.run_to_directory(&files, destdir),
        }
    }

    /// Read and extract one export, logging the per-stage counts.
    pub fn process_file(&self, source: &Path) -> Result<(Vec<String>, ExtractionStats), BatchError> {
        info!("Reading {}", source.display());
        let tweets = read_tweets_from_path(source)?;
        info!(source = %source.display(), "\t{} tweets found", tweets.len());

        let (texts, stats) = self.extractor.extract_with_stats(&tweets);
        let filter = self.extractor.filter();
        info!(
            source = %source.display(),
            "\t{} filtered tweets (remove_retweets: {} remove_replies: {})",
            stats.retained,
            filter.remove_retweets(),
            filter.remove_replies()
        );
        info!(source = %source.display(), "\t{} non-blank tweet texts", stats.emitted);
        debug!(source = %source.display(), blank = stats.blank(), "Extraction finished");
        Ok((texts, stats))
    }

    fn run_to_stream<W: Write + ?Sized>(
        &self,
        files: &[PathBuf],
        stream: &mut W,
    ) -> Result<Vec<FileReport>, BatchError> {
        let mut reports = Vec::with_capacity(files.len());
        for source in files {
            let (texts, stats) = self.process_file(source)?;
            write_lines(stream, &texts).map_err(|e| BatchError::Write {
                path: PathBuf::from("<stdout>"),
                source: e,
            })?;
            reports.push(FileReport {
                source: source.clone(),
                destination: None,
                stats,
            });
        }
        Ok(reports)
    }

    fn run_to_directory(
        &self,
        files: &[PathBuf],
        destdir: &Path,
    ) -> Result<Vec<FileReport>, BatchError> {
        ensure_dir(destdir)?;
        files
            .par_iter()
            .map(|source| {
                let (texts, stats) = self.process_file(source)?;
                let destination = output_path(destdir, source);
                write_file(&destination, &texts)?;
                info!("\tWrote to: {}", destination.display());
                Ok(FileReport {
                    source: source.clone(),
                    destination: Some(destination),
                    stats,
                })
            })
            .collect()
    }
}

/// Sum of the per-file counts.
pub fn total_stats(reports: &[FileReport]) -> ExtractionStats {
    let mut total = ExtractionStats::default();
    for report in reports {
        total += report.stats;
    }
    total
}
