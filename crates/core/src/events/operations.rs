use chrono::NaiveDate;

use super::error::{FormField, ValidationFailure};
use super::types::{EventDraft, EventPatch, FormInput};
use super::DATE_FORMAT;

/// Validates add-form input and turns it into a draft.
///
/// The name is trimmed; all three fields must be non-empty and both dates must
/// parse as `YYYY-MM-DD`. The end date is not checked against the start date.
pub fn validate_draft(input: &FormInput) -> Result<EventDraft, ValidationFailure> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationFailure::MissingField(FormField::Name));
    }
    let start = required_date(&input.start, FormField::Start)?;
    let end = required_date(&input.end, FormField::End)?;

    Ok(EventDraft::new(name, start, end))
}

/// Builds an update patch from inline-edit input.
///
/// Empty inputs are left out of the patch so the server keeps those fields.
pub fn build_patch(input: &FormInput) -> Result<EventPatch, ValidationFailure> {
    let mut patch = EventPatch::default();

    let name = input.name.trim();
    if !name.is_empty() {
        patch = patch.with_name(name);
    }
    if let Some(start) = optional_date(&input.start, FormField::Start)? {
        patch = patch.with_start_date(start);
    }
    if let Some(end) = optional_date(&input.end, FormField::End)? {
        patch = patch.with_end_date(end);
    }

    Ok(patch)
}

fn required_date(value: &str, field: FormField) -> Result<NaiveDate, ValidationFailure> {
    optional_date(value, field)?.ok_or(ValidationFailure::MissingField(field))
}

fn optional_date(value: &str, field: FormField) -> Result<Option<NaiveDate>, ValidationFailure> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationFailure::InvalidDate {
            field,
            value: value.to_string(),
        })
}
