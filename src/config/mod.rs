//! Runtime configuration
//!
//! Defaults reproduce the built-in node list and timings. A TOML file
//! ([`ConfigFile`]) and CLI flags can override them.

mod endpoint;
mod file;

pub use endpoint::{EndpointConfig, JSON_RPC_PATH};
pub use file::{ConfigFile, DisabledEndpoints, Settings};

use crate::error::{ConfigError, Result};
use crate::rpc::default_endpoints;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

/// Default liveness probe timeout in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Default number of trailing blocks to average over
pub const DEFAULT_WINDOW: u64 = 100;

/// Default address for the web server
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Node pool and request settings
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Candidate nodes (shuffled per selection)
    pub endpoints: Vec<EndpointConfig>,
    /// Timeout for the `get_info` liveness probe
    pub probe_timeout_secs: u64,
    /// Timeout for every other call; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
    /// Number of blocks ending at the chain tip
    pub window: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            request_timeout_secs: None,
            window: DEFAULT_WINDOW,
        }
    }
}

impl RpcConfig {
    /// Use only the given node URLs
    pub fn with_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            endpoints: urls.into_iter().map(EndpointConfig::new).collect(),
            ..Default::default()
        }
    }

    /// Drop endpoints whose URL is in `urls`
    pub fn exclude<'a>(&mut self, urls: impl IntoIterator<Item = &'a String>) {
        let excluded: HashSet<_> = urls.into_iter().collect();
        self.endpoints.retain(|e| !excluded.contains(&e.url));
    }

    /// Enabled endpoints, in configured order
    pub fn enabled_endpoints(&self) -> Vec<EndpointConfig> {
        self.endpoints.iter().filter(|e| e.enabled).cloned().collect()
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Check values that would make a TPS computation meaningless
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window".to_string(),
                reason: "must be at least 1 block".to_string(),
            }
            .into());
        }
        if self.probe_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "probe_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if !self.endpoints.iter().any(|e| e.enabled) {
            return Err(ConfigError::NoEndpoints.into());
        }
        Ok(())
    }
}

/// Web server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

impl ServerConfig {
    /// Parse a bind address such as `0.0.0.0:8080`
    pub fn from_bind(bind: &str) -> Result<Self> {
        let bind = bind.parse().map_err(|e| ConfigError::InvalidValue {
            field: "bind".to_string(),
            reason: format!("{}: {}", bind, e),
        })?;
        Ok(Self { bind })
    }
}
