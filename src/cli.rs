//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("TWEETEXT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TWEETEXT_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "tweetext")]
#[command(version = VERSION)]
#[command(about = "Extract clean tweet texts from CSV exports for language-model training")]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: <config dir>/tweetext/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter and clean tweets from a CSV export or a directory of exports
    Extract(ExtractArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// CSV export, or a directory of CSV exports
    pub input: PathBuf,

    /// Write one <name>.txt per export here instead of stdout
    #[arg(long, value_name = "DIR")]
    pub destdir: Option<PathBuf>,

    /// Keep retweets (dropped by default)
    #[arg(long, overrides_with = "remove_retweets")]
    pub keep_retweets: bool,

    /// Drop retweets even if the config keeps them
    #[arg(long, overrides_with = "keep_retweets")]
    pub remove_retweets: bool,

    /// Drop replies (kept by default)
    #[arg(long, overrides_with = "keep_replies")]
    pub remove_replies: bool,

    /// Keep replies even if the config drops them
    #[arg(long, overrides_with = "remove_replies")]
    pub keep_replies: bool,
}

impl ExtractArgs {
    /// Retweet removal requested on the command line, if any.
    pub fn retweets_override(&self) -> Option<bool> {
        flag_pair(self.remove_retweets, self.keep_retweets)
    }

    /// Reply removal requested on the command line, if any.
    pub fn replies_override(&self) -> Option<bool> {
        flag_pair(self.remove_replies, self.keep_replies)
    }
}

fn flag_pair(remove: bool, keep: bool) -> Option<bool> {
    match (remove, keep) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
