//! exfilter: exception property scrubber for structured log pipelines
//!
//! A CLI tool that reads structured log events from stdin, suppresses
//! configured exception properties via a composite filter, and writes the
//! scrubbed events to stdout.

mod cli;
mod config;
mod domain;
mod service;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::ConfigService;
use service::ScrubService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config.log_path)?;
    }

    // Execute command
    match cli.command {
        Commands::Scrub { format } => {
            let service = ScrubService::new(config, format)?;
            service.run()?;
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("exfilter {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
