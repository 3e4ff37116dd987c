//! Client configuration loaded from environment variables.

use std::env;

use crate::api::DEFAULT_BASE_URL;
use crate::store::Latency;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the JSON backend.
    pub base_url: String,
    /// Host the calling page is served from; decides the mode.
    pub page_host: Option<String>,
    /// Simulated latency of the in-memory store.
    pub latency: Latency,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_host: None,
            latency: Latency::none(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `BLOG_API_URL`, `BLOG_PAGE_HOST` and
    /// `BLOG_SIMULATE_LATENCY`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let simulate_latency = var("BLOG_SIMULATE_LATENCY")
            .map(|v| {
                let v = v.trim().to_lowercase();
                !v.is_empty() && v != "false" && v != "0"
            })
            .unwrap_or(false);

        Self {
            base_url: var("BLOG_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            page_host: var("BLOG_PAGE_HOST"),
            latency: if simulate_latency {
                Latency::preview()
            } else {
                Latency::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(load(&[]), ClientConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = load(&[
            ("BLOG_API_URL", "http://api.internal:8080"),
            ("BLOG_PAGE_HOST", "preview.example.dev"),
            ("BLOG_SIMULATE_LATENCY", "1"),
        ]);
        assert_eq!(config.base_url, "http://api.internal:8080");
        assert_eq!(config.page_host.as_deref(), Some("preview.example.dev"));
        assert_eq!(config.latency, Latency::preview());
    }

    #[test]
    fn latency_flag_accepts_false_and_zero() {
        assert_eq!(load(&[("BLOG_SIMULATE_LATENCY", "false")]).latency, Latency::none());
        assert_eq!(load(&[("BLOG_SIMULATE_LATENCY", "0")]).latency, Latency::none());
        assert_eq!(load(&[("BLOG_SIMULATE_LATENCY", "TRUE")]).latency, Latency::preview());
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        assert_eq!(load(&[("BLOG_API_URL", "  ")]).base_url, DEFAULT_BASE_URL);
    }
}
