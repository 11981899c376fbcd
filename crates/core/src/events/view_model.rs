//! Row view-models.
//!
//! Pure description of what a table row shows, decoupled from any live
//! rendering surface.

use super::types::EventRecord;

/// A clickable control inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Switch a row to inline editing.
    Edit,
    /// Delete the row's event.
    Delete,
    /// Commit an inline edit.
    SaveEdit,
    /// Discard an inline edit.
    CancelEdit,
    /// Commit the add form.
    SaveNew,
    /// Discard the add form.
    CancelNew,
}

impl ControlKind {
    /// Returns the CSS class that marks this control in the markup.
    pub fn css_class(&self) -> &'static str {
        match self {
            ControlKind::Edit => "edit-btn",
            ControlKind::Delete => "delete-btn",
            ControlKind::SaveEdit => "save-edit-btn",
            ControlKind::CancelEdit => "cancel-edit-btn",
            ControlKind::SaveNew => "save-btn",
            ControlKind::CancelNew => "cancel-btn",
        }
    }

    /// Parses a CSS class back into a control kind.
    pub fn from_css_class(class: &str) -> Option<Self> {
        match class {
            "edit-btn" => Some(ControlKind::Edit),
            "delete-btn" => Some(ControlKind::Delete),
            "save-edit-btn" => Some(ControlKind::SaveEdit),
            "cancel-edit-btn" => Some(ControlKind::CancelEdit),
            "save-btn" => Some(ControlKind::SaveNew),
            "cancel-btn" => Some(ControlKind::CancelNew),
            _ => None,
        }
    }

    /// Returns the glyph shown on the button.
    pub fn label(&self) -> &'static str {
        match self {
            ControlKind::Edit => "✎",
            ControlKind::Delete => "✕",
            ControlKind::SaveEdit => "✓",
            ControlKind::SaveNew => "+",
            ControlKind::CancelEdit | ControlKind::CancelNew => "×",
        }
    }
}

/// A control tagged with the id of the event it acts on (`data-id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub data_id: Option<String>,
}

impl Control {
    pub fn tagged(kind: ControlKind, data_id: impl Into<String>) -> Self {
        Self {
            kind,
            data_id: Some(data_id.into()),
        }
    }

    pub fn untagged(kind: ControlKind) -> Self {
        Self {
            kind,
            data_id: None,
        }
    }
}

/// Everything a display row shows for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    /// Element id of the row: the record id as text.
    pub element_id: String,
    /// Name, start date and end date, in column order.
    pub cells: [String; 3],
    pub controls: Vec<Control>,
}

/// Maps a record to its display row.
pub fn record_to_row_model(record: &EventRecord) -> RowModel {
    let id = record.id.to_string();
    RowModel {
        cells: [
            record.event_name.clone(),
            record.start_date.to_string(),
            record.end_date.to_string(),
        ],
        controls: vec![
            Control::tagged(ControlKind::Edit, id.clone()),
            Control::tagged(ControlKind::Delete, id.clone()),
        ],
        element_id: id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_to_row_model() {
        let record = EventRecord::new(
            7,
            "Standup",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        let row = record_to_row_model(&record);

        assert_eq!(row.element_id, "7");
        assert_eq!(row.cells, ["Standup", "2024-01-01", "2024-01-02"]);
        assert_eq!(
            row.controls,
            vec![
                Control::tagged(ControlKind::Edit, "7"),
                Control::tagged(ControlKind::Delete, "7"),
            ]
        );
    }

    #[test]
    fn test_row_shows_raw_date_text() {
        let json = r#"{"id":"x","eventName":"Later","startDate":"tbd","endDate":""}"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record_to_row_model(&record).cells, ["Later", "tbd", ""]);
    }

    #[test]
    fn test_css_class_round_trip() {
        let kinds = [
            ControlKind::Edit,
            ControlKind::Delete,
            ControlKind::SaveEdit,
            ControlKind::CancelEdit,
            ControlKind::SaveNew,
            ControlKind::CancelNew,
        ];
        for kind in kinds {
            assert_eq!(ControlKind::from_css_class(kind.css_class()), Some(kind));
        }
        assert_eq!(ControlKind::from_css_class("add-btn"), None);
    }
}
