//! Composition root.

use event_list_client::{EventsApi, EventsClient};
use event_list_core::events::EventCache;

use crate::config::Config;
use crate::controller::Controller;
use crate::dom::TableBody;
use crate::view::Renderer;

/// Builds a controller with a fresh cache and an empty table over `api`.
pub fn build_app<A: EventsApi>(api: A) -> Controller<A> {
    let cache = EventCache::new();
    let view = Renderer::new(TableBody::new());
    Controller::new(api, cache, view)
}

/// Builds a controller talking HTTP to the configured endpoint.
pub fn build_http_app(config: &Config) -> Controller<EventsClient> {
    tracing::info!(base_url = %config.base_url, "Using events collection");
    build_app(EventsClient::new(config.base_url.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Outcome, Phase};
    use crate::testing::{standup, FakeApi};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_instances_are_independent() {
        let first_api = Arc::new(FakeApi::with_events(vec![standup()]));
        let second_api = Arc::new(FakeApi::default());
        let mut first = build_app(first_api.clone());
        let mut second = build_app(second_api.clone());

        assert_eq!(first.init().await, Outcome::Loaded { count: 1 });
        assert_eq!(second.phase(), Phase::Idle);
        assert!(second.cache().is_empty());

        assert_eq!(second.init().await, Outcome::Loaded { count: 0 });
        assert_eq!(first.cache().len(), 1);
        assert!(second.view().body().is_empty());
    }

    #[test]
    fn test_build_http_app_uses_config_url() {
        let config = Config {
            base_url: "http://example.test/events".to_string(),
            log_filter: "off".to_string(),
        };
        let app = build_http_app(&config);
        assert_eq!(app.api().base_url(), "http://example.test/events");
        assert_eq!(app.phase(), Phase::Idle);
    }
}
