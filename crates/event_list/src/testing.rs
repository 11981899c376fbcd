//! In-memory stand-in for the events collection, for unit tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use event_list_client::{ClientError, EventsApi, Result};
use event_list_core::events::{ids_equal, EventDraft, EventId, EventPatch, EventRecord};

use crate::controller::Operation;

/// A call received by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(EventDraft),
    Update(EventId, EventPatch),
    Remove(EventId),
}

#[derive(Default)]
struct FakeState {
    events: Vec<EventRecord>,
    next_id: i64,
    failures: HashMap<Operation, u16>,
    calls: Vec<Call>,
}

/// Records every call and answers from an in-memory list.
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn with_events(events: Vec<EventRecord>) -> Self {
        let next_id = events
            .iter()
            .filter_map(|event| match event.id {
                EventId::Number(n) => Some(n),
                EventId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            state: Mutex::new(FakeState {
                events,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    /// Makes every later `operation` fail with `status`.
    pub fn fail(&self, operation: Operation, status: u16) {
        self.state.lock().unwrap().failures.insert(operation, status);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn record(&self, operation: Operation, call: Call) -> Result<MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(status) = state.failures.get(&operation).copied() {
            return Err(ClientError::Transport { status });
        }
        Ok(state)
    }
}

#[async_trait]
impl EventsApi for FakeApi {
    async fn list(&self) -> Result<Vec<EventRecord>> {
        let state = self.record(Operation::List, Call::List)?;
        Ok(state.events.clone())
    }

    async fn create(&self, draft: &EventDraft) -> Result<EventRecord> {
        let mut state = self.record(Operation::Create, Call::Create(draft.clone()))?;
        state.next_id += 1;
        let created = EventRecord::from_draft(state.next_id, draft.clone());
        state.events.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &EventId, patch: &EventPatch) -> Result<EventRecord> {
        let mut state = self.record(Operation::Update, Call::Update(id.clone(), patch.clone()))?;
        let event = state
            .events
            .iter_mut()
            .find(|event| ids_equal(&event.id, id))
            .ok_or(ClientError::Transport { status: 404 })?;
        event.apply_patch(patch);
        Ok(event.clone())
    }

    async fn remove(&self, id: &EventId) -> Result<serde_json::Value> {
        let mut state = self.record(Operation::Remove, Call::Remove(id.clone()))?;
        let index = state
            .events
            .iter()
            .position(|event| ids_equal(&event.id, id))
            .ok_or(ClientError::Transport { status: 404 })?;
        state.events.remove(index);
        Ok(serde_json::json!({}))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn standup() -> EventRecord {
    EventRecord::new(1, "Standup", date(2024, 1, 1), date(2024, 1, 1))
}
