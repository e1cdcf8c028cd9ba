//! tweetext command-line entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use tweetext::cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    tweetext::logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Extract(args) => commands::extract::handle(&args, config_path),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
