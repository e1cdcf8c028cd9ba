//! Extract command handler

use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use tweetext::batch::{self, BatchDriver, OutputTarget};
use tweetext::cli::ExtractArgs;
use tweetext::extract::{ExtractionConfig, TweetExtractor};
use tweetext::Config;

/// Merge command-line flags over the loaded configuration.
///
/// Each flag pair (`--keep-retweets`/`--remove-retweets`,
/// `--keep-replies`/`--remove-replies`) overrides the config value in
/// either direction; without a flag the config value stands.
pub fn resolve_settings(args: &ExtractArgs, config: &Config) -> (ExtractionConfig, OutputTarget) {
    let extraction = ExtractionConfig {
        remove_retweets: args
            .retweets_override()
            .unwrap_or(config.extract.remove_retweets),
        remove_replies: args
            .replies_override()
            .unwrap_or(config.extract.remove_replies),
    };
    let destdir = args
        .destdir
        .clone()
        .or_else(|| config.output.destdir.clone());
    (extraction, OutputTarget::from_destdir(destdir))
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ExtractArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load config")?;
    let (extraction, target) = resolve_settings(args, &config);

    let driver = BatchDriver::new(TweetExtractor::new(&extraction), target);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let reports = driver
        .run(&args.input, &mut out)
        .with_context(|| format!("Failed to extract tweets from {}", args.input.display()))?;
    out.flush().context("Failed to flush output")?;

    let total = batch::total_stats(&reports);
    info!("Done: {} file(s), {}", reports.len(), total);
    Ok(())
}
