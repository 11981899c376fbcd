//! event_list_client - HTTP client and CLI for the events collection.

pub mod api;
pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use api::EventsApi;
pub use client::EventsClient;
pub use error::{ClientError, Result};
