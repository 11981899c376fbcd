//! Event CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List all events.
    List,
    /// Create a new event.
    Create {
        /// Event name.
        #[arg(long)]
        name: String,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: NaiveDate,
    },
    /// Update an event. Only the given fields change.
    Update {
        /// Event ID.
        id: String,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New start date.
        #[arg(long)]
        start: Option<NaiveDate>,
        /// New end date.
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Delete event by ID.
    Delete {
        /// Event ID.
        id: String,
    },
}
