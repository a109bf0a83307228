//! Transactions-per-second over a block height range

use crate::error::Result;
use crate::rpc::Block;
use async_trait::async_trait;
use serde::Serialize;

/// Anything that can hand out blocks by height
#[async_trait]
pub trait BlockSource {
    async fn block_at(&self, height: u64) -> Result<Block>;
}

/// Inclusive range of block heights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightRange {
    pub start: u64,
    pub end: u64,
}

impl HeightRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// The `window` blocks ending at `tip`, clamped at genesis
    pub fn trailing(tip: u64, window: u64) -> Self {
        Self {
            start: tip.saturating_sub(window.saturating_sub(1)),
            end: tip,
        }
    }

    /// Number of heights covered (zero for an inverted range)
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of one throughput computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TpsReport {
    pub start_height: u64,
    pub end_height: u64,
    /// Transactions in the range, one coinbase per block included
    pub total_transactions: u64,
    /// `end.timestamp - start.timestamp` in seconds
    pub time_diff: i64,
    pub tps: f64,
}

/// `total / time_diff`, or 0 when no time elapsed
pub fn transactions_per_second(total_transactions: u64, time_diff: i64) -> f64 {
    if time_diff == 0 {
        return 0.0;
    }
    total_transactions as f64 / time_diff as f64
}

/// Compute average throughput across `range`.
///
/// The boundary blocks are fetched first for their timestamps, then every
/// height in the range is fetched again and counted. The first failed fetch
/// aborts the computation.
pub async fn calculate_tps<S>(source: &S, range: HeightRange) -> Result<TpsReport>
where
    S: BlockSource + Sync + ?Sized,
{
    let start_block = source.block_at(range.start).await?;
    let end_block = source.block_at(range.end).await?;

    tracing::info!(
        "Counting transactions from block {} to {} ({} blocks)",
        range.start,
        range.end,
        range.len()
    );

    let mut total_transactions = 0u64;
    for height in range.start..=range.end {
        let block = source.block_at(height).await?;
        total_transactions += block.transaction_count();
    }

    let time_diff = end_block.timestamp() as i64 - start_block.timestamp() as i64;
    let tps = transactions_per_second(total_transactions, time_diff);

    tracing::debug!(
        "{} transactions over {}s = {:.4} tps",
        total_transactions,
        time_diff,
        tps
    );

    Ok(TpsReport {
        start_height: range.start,
        end_height: range.end,
        total_transactions,
        time_diff,
        tps,
    })
}
