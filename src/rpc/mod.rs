//! Monero node access over JSON-RPC

mod defaults;
mod endpoint;
mod selector;
pub mod types;

pub use defaults::default_endpoints;
pub use endpoint::Endpoint;
pub use selector::NodeSelector;
pub use types::{Block, BlockHeader, BlockTransactions, NodeInfo};
