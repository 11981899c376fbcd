mod actions;
mod cache;
mod error;
mod operations;
mod types;
mod view_model;

pub use actions::{plan, Action, ActionKind, Command, IgnoreReason};
pub use cache::EventCache;
pub use error::{FormField, ValidationFailure};
pub use operations::{build_patch, validate_draft};
pub use types::{ids_equal, EventDate, EventDraft, EventId, EventPatch, EventRecord, FormInput};
pub use view_model::{record_to_row_model, Control, ControlKind, RowModel};

/// Wire and display format of event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
