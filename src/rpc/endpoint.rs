//! A single Monero node speaking JSON-RPC 2.0

use crate::config::EndpointConfig;
use crate::error::{Error, Result, RpcError};
use crate::rpc::types::{Block, BlockCount, BlockParams, NodeInfo, RpcRequest, RpcResponse};
use crate::throughput::BlockSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

/// JSON-RPC client bound to one node
#[derive(Debug, Clone)]
pub struct Endpoint {
    config: EndpointConfig,
    rpc_url: String,
    http: reqwest::Client,
}

impl Endpoint {
    /// Create an endpoint; `timeout` applies to every call except the probe
    pub fn new(config: EndpointConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RpcError::from)?;

        Ok(Self {
            rpc_url: config.rpc_url(),
            config,
            http,
        })
    }

    /// Node base URL
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// `<base>/json_rpc`
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Liveness probe: `get_info` bounded by `timeout`.
    ///
    /// Any success status counts; the body is not inspected.
    pub async fn probe(&self, timeout: Duration) -> Result<()> {
        let response = self
            .http
            .post(&self.rpc_url)
            .json(&RpcRequest::new("get_info", json!({})))
            .timeout(timeout)
            .send()
            .await
            .map_err(RpcError::from)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RpcError::Status {
                url: self.config.url.clone(),
                status: response.status().as_u16(),
            }
            .into())
        }
    }

    /// Issue a JSON-RPC call and return its `result`
    pub async fn call<P, T>(&self, method: &str, params: P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.rpc_url)
            .json(&RpcRequest::new(method, params))
            .send()
            .await
            .map_err(RpcError::from)?;

        let body = response.text().await.map_err(RpcError::from)?;
        let parsed: RpcResponse<T> = serde_json::from_str(&body)
            .map_err(|e| RpcError::InvalidResponse(format!("{}: {}", method, e)))?;

        if let Some(err) = parsed.error {
            return Err(RpcError::Remote {
                code: err.code,
                message: err.message,
            }
            .into());
        }

        parsed
            .result
            .ok_or_else(|| Error::from(RpcError::MissingResult(method.to_string())))
    }

    /// `get_info`
    pub async fn get_info(&self) -> Result<NodeInfo> {
        self.call("get_info", json!({})).await
    }

    /// `get_block_count`
    pub async fn get_block_count(&self) -> Result<u64> {
        let count: BlockCount = self.call("get_block_count", json!({})).await?;
        Ok(count.count)
    }

    /// Height of the newest block (heights are zero-indexed)
    pub async fn current_height(&self) -> Result<u64> {
        let count = self.get_block_count().await?;
        count.checked_sub(1).ok_or_else(|| {
            RpcError::InvalidResponse("node reported a block count of zero".to_string()).into()
        })
    }

    /// `get_block` by height
    pub async fn get_block(&self, height: u64) -> Result<Block> {
        self.call("get_block", BlockParams { height }).await
    }
}

#[async_trait]
impl BlockSource for Endpoint {
    async fn block_at(&self, height: u64) -> Result<Block> {
        self.get_block(height).await
    }
}
