//! Throughput coordinator: node selection, then a block range, then the calculator

use crate::config::RpcConfig;
use crate::error::Result;
use crate::history::{daily_tps, DailyTps};
use crate::rpc::NodeSelector;
use crate::throughput::{calculate_tps, HeightRange, TpsReport};
use chrono::NaiveDate;

/// Computes TPS over the trailing window of the live chain, or over a past day
#[derive(Debug, Clone)]
pub struct TpsFetcher {
    selector: NodeSelector,
    window: u64,
}

impl TpsFetcher {
    /// Create a fetcher from config
    pub fn new(config: &RpcConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            selector: NodeSelector::new(config)?,
            window: config.window,
        })
    }

    /// Number of candidate nodes
    pub fn endpoint_count(&self) -> usize {
        self.selector.candidate_count()
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    /// Select a node, read the tip height and average the trailing window
    pub async fn fetch_current(&self) -> Result<TpsReport> {
        let endpoint = self.selector.select().await?;
        let tip = endpoint.current_height().await?;
        let range = HeightRange::trailing(tip, self.window);

        tracing::info!(
            "Computing TPS for blocks {}..={} via {}",
            range.start,
            range.end,
            endpoint.url()
        );

        calculate_tps(&endpoint, range).await
    }

    /// Select a node and average every block mined on `date` (UTC)
    pub async fn fetch_day(&self, date: NaiveDate) -> Result<DailyTps> {
        let endpoint = self.selector.select().await?;
        let tip = endpoint.current_height().await?;

        tracing::info!("Computing TPS for {} via {}", date, endpoint.url());

        daily_tps(&endpoint, date, tip).await
    }
}
