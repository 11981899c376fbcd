use std::env;

use event_list_client::client::DEFAULT_BASE_URL;

/// Default tracing filter when neither `RUST_LOG` nor `EVENT_LIST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "event_list=info,event_list_client=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Events collection endpoint (default: "http://localhost:3000/events")
    pub base_url: String,
    /// Tracing filter directive (default: "event_list=info,event_list_client=info")
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENT_LIST_URL` - Events collection endpoint
    /// - `RUST_LOG` - Tracing filter directive, takes precedence
    /// - `EVENT_LIST_LOG` - Tracing filter directive
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("EVENT_LIST_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            log_filter: ["RUST_LOG", "EVENT_LIST_LOG"]
                .into_iter()
                .filter_map(&lookup)
                .find(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Overrides the endpoint, e.g. from a command-line flag.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, "http://localhost:3000/events");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("EVENT_LIST_URL", "http://example.test/api/events"),
            ("EVENT_LIST_LOG", "event_list=debug"),
        ]));
        assert_eq!(config.base_url, "http://example.test/api/events");
        assert_eq!(config.log_filter, "event_list=debug");
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let config = Config::from_lookup(lookup(&[
            ("RUST_LOG", "event_list=trace"),
            ("EVENT_LIST_LOG", "event_list=debug"),
        ]));
        assert_eq!(config.log_filter, "event_list=trace");

        let config = Config::from_lookup(lookup(&[
            ("RUST_LOG", " "),
            ("EVENT_LIST_LOG", "event_list=debug"),
        ]));
        assert_eq!(config.log_filter, "event_list=debug");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("EVENT_LIST_URL", "  ")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = Config::from_lookup(lookup(&[("EVENT_LIST_URL", "http://a.test/events")]))
            .with_base_url(Some("http://b.test/events".to_string()));
        assert_eq!(config.base_url, "http://b.test/events");

        let config = Config::from_lookup(lookup(&[])).with_base_url(None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
