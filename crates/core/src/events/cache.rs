//! In-memory copy of the event collection.
//!
//! The cache is a derived, possibly stale view of the server: `load` replaces it
//! wholesale and the other mutations patch it locally after a successful call.
//! Nothing is enforced here. Duplicate adds and unknown ids are tolerated.

use super::types::{ids_equal, EventId, EventPatch, EventRecord};

/// Ordered sequence of the last-known event records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCache {
    events: Vec<EventRecord>,
}

impl EventCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole sequence.
    pub fn load(&mut self, events: Vec<EventRecord>) {
        self.events = events;
    }

    /// Appends a record.
    pub fn add(&mut self, event: EventRecord) {
        self.events.push(event);
    }

    /// Drops the first record matching `id`. Returns true if one was dropped.
    pub fn remove(&mut self, id: &EventId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    /// Shallow-merges `fields` into the record matching `id`. Returns true if found.
    pub fn patch(&mut self, id: &EventId, fields: &EventPatch) -> bool {
        match self.position(id) {
            Some(index) => {
                self.events[index].apply_patch(fields);
                true
            }
            None => false,
        }
    }

    /// Finds a record by id, accepting either the native or the textual form.
    pub fn find_by_id(&self, id: &EventId) -> Option<&EventRecord> {
        self.events.iter().find(|event| ids_equal(&event.id, id))
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| ids_equal(&event.id, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standup() -> EventRecord {
        EventRecord::new(1, "Standup", date(2024, 1, 1), date(2024, 1, 1))
    }

    fn sample_cache() -> EventCache {
        let mut cache = EventCache::new();
        cache.load(vec![
            standup(),
            EventRecord::new(2, "Planning", date(2024, 1, 8), date(2024, 1, 9)),
            EventRecord::new("x-3", "Retro", date(2024, 1, 12), date(2024, 1, 12)),
        ]);
        cache
    }

    #[test]
    fn test_load_replaces_sequence() {
        let mut cache = sample_cache();
        cache.load(vec![standup()]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.events()[0], standup());
    }

    #[test]
    fn test_add_appends_and_tolerates_duplicates() {
        let mut cache = EventCache::new();
        cache.add(standup());
        cache.add(standup());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_patch_then_remove_scenario() {
        let mut cache = EventCache::new();
        cache.load(vec![standup()]);

        assert!(cache.patch(&EventId::Number(1), &EventPatch::default().with_name("Sync")));
        assert_eq!(
            cache.events(),
            &[EventRecord::new(1, "Sync", date(2024, 1, 1), date(2024, 1, 1))]
        );

        assert!(cache.remove(&EventId::Number(1)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_patch_missing_id_is_noop() {
        let mut cache = sample_cache();
        let before = cache.clone();
        assert!(!cache.patch(&EventId::Number(42), &EventPatch::default().with_name("Nope")));
        assert_eq!(cache, before);
    }

    #[test]
    fn test_remove_drops_only_first_match() {
        let mut cache = EventCache::new();
        cache.add(standup());
        cache.add(EventRecord::new(1, "Duplicate", date(2024, 1, 2), date(2024, 1, 2)));

        assert!(cache.remove(&EventId::from("1")));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.events()[0].event_name, "Duplicate");
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut cache = sample_cache();
        assert!(!cache.remove(&EventId::from("nope")));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_find_by_id_native_and_text() {
        let cache = sample_cache();
        for record in cache.events() {
            let native = cache.find_by_id(&record.id);
            let text = cache.find_by_id(&EventId::Text(record.id.to_string()));
            assert_eq!(native, Some(record));
            assert_eq!(native, text);
        }
        assert_eq!(cache.find_by_id(&EventId::from("99")), None);
    }
}
