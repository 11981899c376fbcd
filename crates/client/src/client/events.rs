//! Event collection operations.

use super::EventsClient;
use crate::error::Result;
use event_list_core::events::{EventDraft, EventId, EventPatch, EventRecord};

impl EventsClient {
    /// List all events.
    pub async fn list_events(&self) -> Result<Vec<EventRecord>> {
        tracing::debug!(url = %self.base_url, "GET events");
        let response = self.client.get(&self.base_url).send().await?;
        self.handle_response(response).await
    }

    /// Create a new event. The server assigns the id.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<EventRecord> {
        tracing::debug!(url = %self.base_url, name = %draft.event_name, "POST event");
        let response = self.client.post(&self.base_url).json(draft).send().await?;
        self.handle_response(response).await
    }

    /// Update the fields present in `patch`.
    pub async fn update_event(&self, id: &EventId, patch: &EventPatch) -> Result<EventRecord> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "PUT event");
        let response = self.client.put(url).json(patch).send().await?;
        self.handle_response(response).await
    }

    /// Delete an event. Returns whatever acknowledgement the server sends.
    pub async fn delete_event(&self, id: &EventId) -> Result<serde_json::Value> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "DELETE event");
        let response = self.client.delete(url).send().await?;
        self.handle_ack_response(response).await
    }
}
