//! In-memory block source for tests

use crate::error::{Result, RpcError};
use crate::rpc::{Block, BlockHeader, BlockTransactions};
use crate::throughput::BlockSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory chain that records every requested height
#[derive(Default)]
pub(crate) struct FakeChain {
    blocks: HashMap<u64, Block>,
    requests: Mutex<Vec<u64>>,
}

impl FakeChain {
    /// `count` coinbase-only blocks, `spacing` seconds apart from `first_timestamp`
    pub(crate) fn evenly_spaced(count: u64, first_timestamp: u64, spacing: u64) -> Self {
        (0..count).fold(Self::default(), |chain, h| {
            chain.with_block(h, first_timestamp + h * spacing, BlockTransactions::CoinbaseOnly)
        })
    }

    pub(crate) fn with_block(
        mut self,
        height: u64,
        timestamp: u64,
        txs: BlockTransactions,
    ) -> Self {
        self.blocks.insert(
            height,
            Block {
                header: BlockHeader {
                    timestamp,
                    height: Some(height),
                    hash: None,
                },
                transactions: txs,
            },
        );
        self
    }

    pub(crate) fn requests(&self) -> Vec<u64> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlockSource for FakeChain {
    async fn block_at(&self, height: u64) -> Result<Block> {
        self.requests.lock().unwrap().push(height);
        self.blocks
            .get(&height)
            .cloned()
            .ok_or_else(|| RpcError::InvalidResponse(format!("no block at {}", height)).into())
    }
}

pub(crate) fn hashes(n: usize) -> BlockTransactions {
    BlockTransactions::Hashes((0..n).map(|i| format!("{:064x}", i)).collect())
}
