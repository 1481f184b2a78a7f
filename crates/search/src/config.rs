//! Client configuration.

use serde::{Deserialize, Serialize};

/// Authentication sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAuth {
    /// Basic username/password authentication.
    Basic { username: String, password: String },
    /// Bearer token authentication.
    Bearer { token: String },
    /// API key authentication (`id`, `api_key`).
    ApiKey { id: String, api_key: String },
}

/// Connection settings for [`EsTransport`](crate::transport::EsTransport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Node URLs. Only the first is used (single-node connection pool).
    #[serde(default = "default_nodes")]
    pub nodes: Vec<String>,

    /// Request timeout in milliseconds (default: 30000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default)]
    pub auth: Option<SearchAuth>,

    /// Skips TLS certificate validation. Development only.
    #[serde(default)]
    pub disable_certificate_validation: bool,

    /// Page size applied to multi-search requests that do not set one
    /// (default: 10).
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

fn default_nodes() -> Vec<String> {
    vec!["http://localhost:9200".to_string()]
}

fn default_request_timeout_ms() -> u64 {
    30000
}

fn default_page_size() -> u32 {
    crate::batch::DEFAULT_PAGE_SIZE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            request_timeout_ms: default_request_timeout_ms(),
            auth: None,
            disable_certificate_validation: false,
            default_page_size: default_page_size(),
        }
    }
}

impl SearchConfig {
    /// The node requests are sent to.
    pub fn primary_node(&self) -> &str {
        self.nodes
            .first()
            .map(String::as_str)
            .unwrap_or("http://localhost:9200")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.nodes, vec!["http://localhost:9200"]);
        assert_eq!(config.request_timeout_ms, 30000);
        assert_eq!(config.default_page_size, 10);
        assert!(config.auth.is_none());
        assert!(!config.disable_certificate_validation);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"nodes": ["http://es:9200"]}"#).unwrap();
        assert_eq!(config.primary_node(), "http://es:9200");
        assert_eq!(config.request_timeout_ms, 30000);

        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_auth_round_trip() {
        let config = SearchConfig {
            auth: Some(SearchAuth::ApiKey {
                id: "key-id".to_string(),
                api_key: "secret".to_string(),
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.auth, config.auth);
    }

    #[test]
    fn test_primary_node_falls_back() {
        let config = SearchConfig {
            nodes: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.primary_node(), "http://localhost:9200");
    }
}
