//! Client Configuration
//!
//! Read once at startup from `data-*` attributes on `<body>`.

use log::LevelFilter;

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub poll_interval_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Build from an attribute lookup. Missing or invalid values use defaults.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base = get("data-api-base")
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let poll_interval_ms = get("data-poll-ms")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.poll_interval_ms);

        let log_level = get("data-log-level")
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base,
            poll_interval_ms,
            log_level,
        }
    }

    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        Self::from_attributes(|name| body.as_ref().and_then(|b| b.get_attribute(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_absent() {
        let config = ClientConfig::from_attributes(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.poll_interval_ms, 30_000);
    }

    #[test]
    fn test_reads_attributes() {
        let config = ClientConfig::from_attributes(lookup(&[
            ("data-api-base", "http://localhost:5000/"),
            ("data-poll-ms", "5000"),
            ("data-log-level", "debug"),
        ]));
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_attributes(lookup(&[
            ("data-poll-ms", "0"),
            ("data-log-level", "loud"),
        ]));
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
