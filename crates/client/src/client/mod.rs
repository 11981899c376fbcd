//! HTTP client for the events collection endpoint.

pub mod events;

use event_list_core::events::EventId;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Default collection endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/events";

/// HTTP client for one events collection.
#[derive(Debug, Clone)]
pub struct EventsClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    /// Create a new client for the collection at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL of one item of the collection.
    ///
    /// The id is appended as a single percent-encoded path segment.
    fn item_url(&self, id: &EventId) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    /// Turn a response into `T`, or into a transport error on non-success status.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let body = self.success_body(response).await?;
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Like `handle_response`, but an empty body reads as `null`.
    async fn handle_ack_response(&self, response: reqwest::Response) -> Result<serde_json::Value> {
        let body = self.success_body(response).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    async fn success_body(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %response.url(), "Non-success response");
            return Err(ClientError::Transport {
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
