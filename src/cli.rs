//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Exception property scrubber for structured log pipelines
#[derive(Parser)]
#[command(
    name = "exfilter",
    version,
    about = "Exception property scrubber for structured log pipelines",
    long_about = "A CLI tool that reads structured log events from stdin, suppresses \
                  configured exception properties, and writes the scrubbed events to stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Structured log event formats on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Plain JSON events with a top-level "exception" object (default)
    #[default]
    Json,
    /// Compact Log Event Format; exception detail rides in "ExceptionDetail"
    Clef,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Scrub NDJSON events from stdin to stdout (alias: run)
    #[command(alias = "run")]
    Scrub {
        /// Structured log event format
        #[arg(long, short = 'f', default_value = "json")]
        format: Format,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
