//! Output formatting for events.

pub mod json;
pub mod pretty;

use event_list_core::events::EventRecord;

use crate::cli::OutputFormat;

/// Format a list of events in the requested format.
pub fn format_events(events: &[EventRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&events),
        OutputFormat::Pretty => pretty::format_events(events),
    }
}

/// Format one event. `heading` only applies to pretty output.
pub fn format_event(event: &EventRecord, heading: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(event),
        OutputFormat::Pretty => format!("{heading}:\n{}", pretty::format_event(event)),
    }
}
