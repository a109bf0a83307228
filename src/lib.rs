//! monero-tps - Live Monero transaction throughput
//!
//! A Rust library and CLI that picks a reachable public Monero node, walks the
//! most recent blocks over JSON-RPC and reports average transactions per
//! second. The same computation backs a small web server. Past days can be
//! measured too, by locating the blocks mined on a given UTC date.
//!
//! # Example
//!
//! ```rust,no_run
//! use monero_tps::{RpcConfig, TpsFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = TpsFetcher::new(&RpcConfig::default())?;
//!     let report = fetcher.fetch_current().await?;
//!
//!     println!("{:.4} tx/s over blocks {}..={}", report.tps, report.start_height, report.end_height);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetcher;
pub mod history;
pub mod rpc;
pub mod server;
pub mod throughput;

#[cfg(test)]
mod fake_chain;

// Re-exports for convenience
pub use config::{ConfigFile, EndpointConfig, RpcConfig, ServerConfig};
pub use error::{ConfigError, Error, Result, RpcError};
pub use fetcher::TpsFetcher;
pub use history::{daily_tps, height_at, DailyTps};
pub use rpc::{default_endpoints, Block, BlockTransactions, Endpoint, NodeInfo, NodeSelector};
pub use throughput::{calculate_tps, transactions_per_second, BlockSource, HeightRange, TpsReport};
