//! CLI command definitions.

pub mod events;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the events collection.
#[derive(Debug, Parser)]
#[command(name = "event-list-client")]
#[command(about = "CLI client for the events collection", long_about = None)]
pub struct Cli {
    /// Collection endpoint URL.
    #[arg(long, env = "EVENT_LIST_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable table output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Event management.
    Events(events::EventsCommand),
}
