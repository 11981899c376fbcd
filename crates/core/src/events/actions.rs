//! Tagged row actions and the reducer that plans them.
//!
//! A host turns a click into an [`Action`]; [`plan`] decides what the action
//! means given the current cache, without touching the network or the table.

use super::cache::EventCache;
use super::error::ValidationFailure;
use super::operations::build_patch;
use super::types::{EventId, EventPatch, EventRecord, FormInput};

/// What the user asked for on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Delete,
    Edit,
    /// Commit an inline edit with the values currently in the row's inputs.
    Save(FormInput),
    Cancel,
}

/// A row action tagged with the id of the event it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub id: EventId,
}

impl Action {
    pub fn new(kind: ActionKind, id: impl Into<EventId>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// The effect the controller should carry out for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Delete the event remotely, then drop its row.
    Remove(EventId),
    /// Swap the record's row for inline inputs.
    BeginEdit(EventRecord),
    /// Send the patch, then reload everything.
    Update { id: EventId, patch: EventPatch },
    /// Reload everything from the server.
    Reload,
    /// The input was invalid; nothing is sent.
    Reject(ValidationFailure),
    /// Nothing to do.
    Ignore(IgnoreReason),
}

/// Why an action produced no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The cache holds no record with the action's id.
    UnknownId,
}

/// Plans the effect of an action against the current cache.
pub fn plan(action: &Action, cache: &EventCache) -> Command {
    match &action.kind {
        ActionKind::Delete => Command::Remove(action.id.clone()),
        ActionKind::Edit => match cache.find_by_id(&action.id) {
            Some(record) => Command::BeginEdit(record.clone()),
            None => Command::Ignore(IgnoreReason::UnknownId),
        },
        ActionKind::Save(input) => match build_patch(input) {
            Ok(patch) if patch.is_empty() => Command::Reload,
            Ok(patch) => Command::Update {
                id: action.id.clone(),
                patch,
            },
            Err(failure) => Command::Reject(failure),
        },
        ActionKind::Cancel => Command::Reload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::FormField;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cache() -> EventCache {
        let mut cache = EventCache::new();
        cache.load(vec![EventRecord::new(
            1,
            "Standup",
            date(2024, 1, 1),
            date(2024, 1, 1),
        )]);
        cache
    }

    #[test]
    fn test_plan_delete() {
        let action = Action::new(ActionKind::Delete, "1");
        assert_eq!(plan(&action, &cache()), Command::Remove(EventId::from("1")));
    }

    #[test]
    fn test_plan_edit_uses_text_id() {
        let action = Action::new(ActionKind::Edit, "1");
        match plan(&action, &cache()) {
            Command::BeginEdit(record) => assert_eq!(record.id, EventId::Number(1)),
            other => panic!("expected BeginEdit, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_edit_unknown_id() {
        let action = Action::new(ActionKind::Edit, "9");
        assert_eq!(
            plan(&action, &cache()),
            Command::Ignore(IgnoreReason::UnknownId)
        );
    }

    #[test]
    fn test_plan_save_builds_patch() {
        let input = FormInput::new("Sync", "2024-01-01", "2024-01-03");
        let action = Action::new(ActionKind::Save(input), "1");
        assert_eq!(
            plan(&action, &cache()),
            Command::Update {
                id: EventId::from("1"),
                patch: EventPatch::default()
                    .with_name("Sync")
                    .with_start_date(date(2024, 1, 1))
                    .with_end_date(date(2024, 1, 3)),
            }
        );
    }

    #[test]
    fn test_plan_save_rejects_bad_date() {
        let input = FormInput::new("Sync", "soon", "2024-01-03");
        let action = Action::new(ActionKind::Save(input), "1");
        assert!(matches!(
            plan(&action, &cache()),
            Command::Reject(ValidationFailure::InvalidDate {
                field: FormField::Start,
                ..
            })
        ));
    }

    #[test]
    fn test_plan_save_with_nothing_to_send_reloads() {
        let action = Action::new(ActionKind::Save(FormInput::default()), "1");
        assert_eq!(plan(&action, &cache()), Command::Reload);
    }

    #[test]
    fn test_plan_cancel_reloads() {
        let action = Action::new(ActionKind::Cancel, "1");
        assert_eq!(plan(&action, &cache()), Command::Reload);
    }
}
