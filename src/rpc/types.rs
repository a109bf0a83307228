//! JSON-RPC envelopes and Monero result types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request body
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            id: "0",
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response body
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// Error object returned by the node
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Parameters for `get_block`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlockParams {
    pub height: u64,
}

/// Result of `get_block_count`
#[derive(Debug, Clone, Deserialize)]
pub struct BlockCount {
    pub count: u64,
}

/// Subset of the `get_info` result
#[derive(Debug, Clone, Deserialize)]
pub struct NodeInfo {
    pub height: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub nettype: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Block header fields used for throughput
#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeader {
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Non-coinbase transactions listed by a block
///
/// Nodes report either hashes (`tx_hashes`), full objects (`transactions`),
/// or nothing when the block only holds its coinbase.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockTransactions {
    Hashes(Vec<String>),
    Objects(Vec<Value>),
    CoinbaseOnly,
}

impl BlockTransactions {
    /// Transactions in the block, coinbase included
    pub fn count(&self) -> u64 {
        match self {
            BlockTransactions::Hashes(hashes) => hashes.len() as u64 + 1,
            BlockTransactions::Objects(txs) => txs.len() as u64 + 1,
            BlockTransactions::CoinbaseOnly => 1,
        }
    }
}

/// Decoded result of `get_block`
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: BlockTransactions,
}

impl Block {
    pub fn timestamp(&self) -> u64 {
        self.header.timestamp
    }

    pub fn transaction_count(&self) -> u64 {
        self.transactions.count()
    }
}

#[derive(Deserialize)]
struct RawBlock {
    block_header: BlockHeader,
    #[serde(default)]
    tx_hashes: Option<Vec<String>>,
    #[serde(default)]
    transactions: Option<Vec<Value>>,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        let transactions = match (raw.tx_hashes, raw.transactions) {
            (Some(hashes), _) => BlockTransactions::Hashes(hashes),
            (None, Some(txs)) => BlockTransactions::Objects(txs),
            (None, None) => BlockTransactions::CoinbaseOnly,
        };
        Block {
            header: raw.block_header,
            transactions,
        }
    }
}
