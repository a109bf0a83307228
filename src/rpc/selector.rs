//! Node selection: shuffle the candidates, keep the first that answers

use crate::config::{EndpointConfig, RpcConfig};
use crate::error::{ConfigError, Result, RpcError};
use crate::rpc::Endpoint;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use std::time::Duration;

/// Picks a reachable node from a fixed candidate list
#[derive(Debug, Clone)]
pub struct NodeSelector {
    /// Enabled candidates, in configured order
    candidates: Vec<EndpointConfig>,
    /// Timeout for each `get_info` probe
    probe_timeout: Duration,
    /// Timeout applied to calls made through the selected endpoint
    request_timeout: Option<Duration>,
}

impl NodeSelector {
    /// Create a selector from the RPC config
    pub fn new(config: &RpcConfig) -> Result<Self> {
        let candidates = config.enabled_endpoints();
        if candidates.is_empty() {
            return Err(ConfigError::NoEndpoints.into());
        }

        Ok(Self {
            candidates,
            probe_timeout: config.probe_timeout(),
            request_timeout: config.request_timeout(),
        })
    }

    /// Number of candidate nodes
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &[EndpointConfig] {
        &self.candidates
    }

    /// Candidates in a uniformly random order
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<EndpointConfig> {
        let mut order = self.candidates.clone();
        order.shuffle(rng);
        order
    }

    /// Shuffle and return the first node whose probe succeeds
    pub async fn select(&self) -> Result<Endpoint> {
        // ThreadRng is !Send; finish shuffling before the first await
        let order = self.shuffled(&mut thread_rng());
        self.first_reachable(order).await
    }

    /// Probe `order` front to back and stop at the first success
    pub async fn first_reachable(&self, order: Vec<EndpointConfig>) -> Result<Endpoint> {
        for config in order {
            let endpoint = Endpoint::new(config, self.request_timeout)?;

            match endpoint.probe(self.probe_timeout).await {
                Ok(()) => {
                    tracing::info!("Connected to node: {}", endpoint.url());
                    return Ok(endpoint);
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to node: {}: {}", endpoint.url(), e);
                }
            }
        }

        Err(RpcError::NoReachableNode.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::{Matcher, Server, ServerGuard};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    const UNREACHABLE: &str = "http://127.0.0.1:1";

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn lines_containing(&self, needle: &str) -> usize {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .filter(|line| line.contains(needle))
                .count()
        }
    }

    async fn probe_mock(server: &mut ServerGuard, hits: usize) -> mockito::Mock {
        server
            .mock("POST", "/json_rpc")
            .match_body(Matcher::PartialJson(json!({"method": "get_info"})))
            .with_status(200)
            .with_body(r#"{"id":"0","jsonrpc":"2.0","result":{"height":10,"status":"OK"}}"#)
            .expect(hits)
            .create_async()
            .await
    }

    #[test]
    fn test_empty_config_rejected() {
        let config = RpcConfig {
            endpoints: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            NodeSelector::new(&config),
            Err(Error::Config(ConfigError::NoEndpoints))
        ));
    }

    #[test]
    fn test_disabled_endpoints_skipped() {
        let config = RpcConfig {
            endpoints: vec![
                EndpointConfig::new("http://a:18081"),
                EndpointConfig::new("http://b:18081").with_enabled(false),
            ],
            ..Default::default()
        };
        let selector = NodeSelector::new(&config).unwrap();
        assert_eq!(selector.candidate_count(), 1);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let selector = NodeSelector::new(&RpcConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut order: Vec<_> = selector
            .shuffled(&mut rng)
            .into_iter()
            .map(|e| e.url)
            .collect();
        let mut original: Vec<_> = selector.candidates().iter().map(|e| e.url.clone()).collect();
        order.sort();
        original.sort();
        assert_eq!(order, original);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let selector = NodeSelector::new(&RpcConfig::default()).unwrap();
        let a = selector.shuffled(&mut StdRng::seed_from_u64(42));
        let b = selector.shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_skips_failed_node() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut b = Server::new_async().await;
        let m = probe_mock(&mut b, 1).await;

        let config = RpcConfig::with_urls([UNREACHABLE.to_string(), b.url()]);
        let selector = NodeSelector::new(&config).unwrap();

        let endpoint = selector
            .first_reachable(selector.candidates().to_vec())
            .await
            .unwrap();
        assert_eq!(endpoint.rpc_url(), format!("{}/json_rpc", b.url()));
        m.assert_async().await;

        assert_eq!(logs.lines_containing("Failed to connect to node: http://127.0.0.1:1"), 1);
        assert_eq!(logs.lines_containing("Connected to node:"), 1);
    }

    #[tokio::test]
    async fn test_stops_after_first_success() {
        let mut first = Server::new_async().await;
        let mut second = Server::new_async().await;
        let m_first = probe_mock(&mut first, 1).await;
        let m_second = probe_mock(&mut second, 0).await;

        let config = RpcConfig::with_urls([first.url(), second.url()]);
        let selector = NodeSelector::new(&config).unwrap();

        let endpoint = selector
            .first_reachable(selector.candidates().to_vec())
            .await
            .unwrap();
        assert_eq!(endpoint.url(), first.url());
        m_first.assert_async().await;
        m_second.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_moves_on() {
        let mut down = Server::new_async().await;
        let mut up = Server::new_async().await;
        let _down = down
            .mock("POST", "/json_rpc")
            .with_status(502)
            .create_async()
            .await;
        let m = probe_mock(&mut up, 1).await;

        let config = RpcConfig::with_urls([down.url(), up.url()]);
        let selector = NodeSelector::new(&config).unwrap();
        let endpoint = selector
            .first_reachable(selector.candidates().to_vec())
            .await
            .unwrap();
        assert_eq!(endpoint.url(), up.url());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_all_unreachable() {
        let config = RpcConfig::with_urls(["http://127.0.0.1:1", "http://127.0.0.1:2"]);
        let selector = NodeSelector::new(&config).unwrap();

        let err = selector.select().await.unwrap_err();
        assert!(matches!(err, Error::Rpc(RpcError::NoReachableNode)));
    }
}
