//! The remote resource seam.

use async_trait::async_trait;
use event_list_core::events::{EventDraft, EventId, EventPatch, EventRecord};

use crate::client::EventsClient;
use crate::error::Result;

/// The four operations of the events collection.
///
/// Every operation fails with [`crate::ClientError::Transport`] on a
/// non-success status. Nothing here retries.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// Fetch the whole collection, in server order.
    async fn list(&self) -> Result<Vec<EventRecord>>;

    /// Create an event and return it with its assigned id.
    async fn create(&self, draft: &EventDraft) -> Result<EventRecord>;

    /// Shallow-merge `patch` into the event and return the result.
    async fn update(&self, id: &EventId, patch: &EventPatch) -> Result<EventRecord>;

    /// Delete the event and return the acknowledgement payload.
    async fn remove(&self, id: &EventId) -> Result<serde_json::Value>;
}

#[async_trait]
impl<T: EventsApi + ?Sized> EventsApi for std::sync::Arc<T> {
    async fn list(&self) -> Result<Vec<EventRecord>> {
        (**self).list().await
    }

    async fn create(&self, draft: &EventDraft) -> Result<EventRecord> {
        (**self).create(draft).await
    }

    async fn update(&self, id: &EventId, patch: &EventPatch) -> Result<EventRecord> {
        (**self).update(id, patch).await
    }

    async fn remove(&self, id: &EventId) -> Result<serde_json::Value> {
        (**self).remove(id).await
    }
}

#[async_trait]
impl EventsApi for EventsClient {
    async fn list(&self) -> Result<Vec<EventRecord>> {
        self.list_events().await
    }

    async fn create(&self, draft: &EventDraft) -> Result<EventRecord> {
        self.create_event(draft).await
    }

    async fn update(&self, id: &EventId, patch: &EventPatch) -> Result<EventRecord> {
        self.update_event(id, patch).await
    }

    async fn remove(&self, id: &EventId) -> Result<serde_json::Value> {
        self.delete_event(id).await
    }
}
