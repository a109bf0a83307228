//! Configuration file handling

use super::{EndpointConfig, RpcConfig, DEFAULT_BIND, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_WINDOW};
use crate::error::{ConfigError, Result};
use crate::rpc::default_endpoints;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Custom endpoints (replace the built-in list when non-empty)
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,

    /// Disabled endpoints
    #[serde(default)]
    pub disabled_endpoints: DisabledEndpoints,
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Liveness probe timeout in seconds
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_seconds: u64,

    /// Timeout for block fetches in seconds (unset = no timeout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,

    /// Number of trailing blocks
    #[serde(default = "default_window")]
    pub window: u64,

    /// Web server bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_probe_timeout() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

fn default_window() -> u64 {
    DEFAULT_WINDOW
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            probe_timeout_seconds: default_probe_timeout(),
            request_timeout_seconds: None,
            window: default_window(),
            bind: default_bind(),
        }
    }
}

/// Disabled endpoints configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisabledEndpoints {
    /// List of URLs to disable
    #[serde(default)]
    pub urls: Vec<String>,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("monero-tps")
            .join("config.toml")
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path();
        if path.exists() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save to a specific path
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::InvalidFile(format!("Failed to create directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check if an endpoint URL is disabled
    pub fn is_endpoint_disabled(&self, url: &str) -> bool {
        self.disabled_endpoints.urls.iter().any(|u| u == url)
    }

    /// Build the runtime RPC config from this file
    pub fn rpc_config(&self) -> RpcConfig {
        let mut endpoints = if self.endpoints.is_empty() {
            default_endpoints()
        } else {
            self.endpoints.clone()
        };
        endpoints.retain(|e| !self.is_endpoint_disabled(&e.url));

        RpcConfig {
            endpoints,
            probe_timeout_secs: self.settings.probe_timeout_seconds,
            request_timeout_secs: self.settings.request_timeout_seconds,
            window: self.settings.window,
        }
    }
}
