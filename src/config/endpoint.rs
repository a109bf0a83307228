//! RPC endpoint configuration

use serde::{Deserialize, Serialize};

/// Path appended to a node's base URL for JSON-RPC calls
pub const JSON_RPC_PATH: &str = "/json_rpc";

/// Configuration for a single Monero node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Node base URL (scheme, host and port)
    pub url: String,
    /// Optional note about the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether this endpoint is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl EndpointConfig {
    /// Create a new endpoint config with defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            note: None,
            enabled: true,
        }
    }

    /// Builder-style setter for note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Builder-style setter for enabled
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Full JSON-RPC URL (`<base>/json_rpc`)
    pub fn rpc_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), JSON_RPC_PATH)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new("http://localhost:18081")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_config() {
        let config = EndpointConfig::new("http://node.example.com:18081")
            .with_note("test node")
            .with_enabled(false);

        assert_eq!(config.url, "http://node.example.com:18081");
        assert_eq!(config.note.as_deref(), Some("test node"));
        assert!(!config.enabled);
    }

    #[test]
    fn test_rpc_url() {
        let config = EndpointConfig::new("https://node.sethforprivacy.com:443");
        assert_eq!(
            config.rpc_url(),
            "https://node.sethforprivacy.com:443/json_rpc"
        );

        // Trailing slash is not doubled
        let config = EndpointConfig::new("http://127.0.0.1:18081/");
        assert_eq!(config.rpc_url(), "http://127.0.0.1:18081/json_rpc");
    }
}
