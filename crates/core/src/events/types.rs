use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned identifier of an event.
///
/// The collection endpoint may hand out numeric or string ids, and the table
/// surfaces every id as text, so both shapes are accepted and kept as-is.
/// Compare ids with [`ids_equal`], never with `==` across shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl EventId {
    /// Returns the normalized textual form used for comparison.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            EventId::Number(n) => Cow::Owned(n.to_string()),
            EventId::Text(s) => Cow::Borrowed(s.trim()),
        }
    }

    /// Returns the id as an integer when its text is one, e.g. `"01"` → 1.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            EventId::Number(n) => Some(*n),
            EventId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{n}"),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Number(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Text(s)
    }
}

/// Compares two ids the way a row's text id is matched to a record.
///
/// `Number(1)` and `Text("1")` are the same event: the first comes from the
/// server, the second from a row's element id or `data-id` attribute. When
/// both sides read as integers they compare numerically, so `"01"` matches
/// `1`. Anything else compares by trimmed text.
pub fn ids_equal(a: &EventId, b: &EventId) -> bool {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x == y,
        _ => a.as_key() == b.as_key(),
    }
}

/// A date as stored on a record.
///
/// Forms only ever send `YYYY-MM-DD`, but the collection keeps whatever it
/// was given. Text that does not parse is kept verbatim so one odd record
/// still lists and renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
    Date(NaiveDate),
    Raw(String),
}

impl EventDate {
    /// Parses `YYYY-MM-DD`, falling back to the raw text.
    pub fn parse(value: &str) -> Self {
        NaiveDate::parse_from_str(value.trim(), super::DATE_FORMAT)
            .map(EventDate::Date)
            .unwrap_or_else(|_| EventDate::Raw(value.to_string()))
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            EventDate::Date(date) => Some(*date),
            EventDate::Raw(_) => None,
        }
    }
}

impl Default for EventDate {
    fn default() -> Self {
        EventDate::Raw(String::new())
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDate::Date(date) => write!(f, "{}", date.format(super::DATE_FORMAT)),
            EventDate::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        EventDate::Date(date)
    }
}

impl PartialEq<NaiveDate> for EventDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.as_date() == Some(*other)
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EventDateVisitor)
    }
}

struct EventDateVisitor;

impl Visitor<'_> for EventDateVisitor {
    type Value = EventDate;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a date string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<EventDate, E> {
        Ok(EventDate::parse(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<EventDate, E> {
        Ok(EventDate::Raw(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<EventDate, E> {
        Ok(EventDate::Raw(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<EventDate, E> {
        Ok(EventDate::Raw(value.to_string()))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<EventDate, E> {
        Ok(EventDate::Raw(value.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<EventDate, E> {
        Ok(EventDate::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<EventDate, E> {
        Ok(EventDate::default())
    }
}

/// A calendar event as stored by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: EventId,
    pub event_name: String,
    #[serde(default)]
    pub start_date: EventDate,
    /// Not validated against `start_date`.
    #[serde(default)]
    pub end_date: EventDate,
}

impl EventRecord {
    /// Creates a record with the given id and fields.
    pub fn new(
        id: impl Into<EventId>,
        event_name: impl Into<String>,
        start_date: impl Into<EventDate>,
        end_date: impl Into<EventDate>,
    ) -> Self {
        Self {
            id: id.into(),
            event_name: event_name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Builds the record the server returns for a draft once it assigns `id`.
    pub fn from_draft(id: impl Into<EventId>, draft: EventDraft) -> Self {
        Self {
            id: id.into(),
            event_name: draft.event_name,
            start_date: draft.start_date.into(),
            end_date: draft.end_date.into(),
        }
    }

    /// Shallow-merges a patch into this record. Absent fields are left unchanged.
    pub fn apply_patch(&mut self, patch: &EventPatch) {
        if let Some(name) = &patch.event_name {
            self.event_name = name.clone();
        }
        if let Some(start) = patch.start_date {
            self.start_date = start.into();
        }
        if let Some(end) = patch.end_date {
            self.end_date = end.into();
        }
    }
}

/// Payload for creating an event. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl EventDraft {
    pub fn new(event_name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            event_name: event_name.into(),
            start_date,
            end_date,
        }
    }
}

/// Partial payload for updating an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl EventPatch {
    /// Set the new event name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = Some(name.into());
        self
    }

    /// Set the new start date.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the new end date.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Returns true if the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.event_name.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Raw text typed into an add or inline-edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Pre-fills the inputs from an existing record.
    pub fn from_record(record: &EventRecord) -> Self {
        Self {
            name: record.event_name.clone(),
            start: record.start_date.to_string(),
            end: record.end_date.to_string(),
        }
    }
}
