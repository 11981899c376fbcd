//! Pretty output formatting.

use event_list_core::events::{record_to_row_model, EventRecord};

/// Format an event for display.
pub fn format_event(event: &EventRecord) -> String {
    let row = record_to_row_model(event);
    let [name, start, end] = &row.cells;
    format!("{}\n  ID: {}\n  Start: {}\n  End: {}", name, row.element_id, start, end)
}

/// Format events for display.
pub fn format_events(events: &[EventRecord]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_event() {
        let event = EventRecord::new(
            1,
            "Standup",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(
            format_event(&event),
            "Standup\n  ID: 1\n  Start: 2024-01-01\n  End: 2024-01-01"
        );
    }

    #[test]
    fn test_format_events_empty() {
        assert_eq!(format_events(&[]), "No events found.");
    }
}
