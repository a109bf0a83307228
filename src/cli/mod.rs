//! CLI command modules
//!
//! Each subcommand has its own module with argument definitions and handlers.

pub mod config;
pub mod endpoints;
pub mod serve;
pub mod tps;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use monero_tps::{ConfigFile, EndpointConfig, RpcConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monero-tps")]
#[command(
    version,
    about = "Live Monero transaction throughput from public RPC nodes"
)]
#[command(after_help = r#"EXAMPLES:
    # Serve the web page and JSON endpoint on port 5000
    monero-tps serve

    # Compute TPS once and print the full report
    monero-tps tps

    # Use a local node only
    monero-tps --node http://127.0.0.1:18081 tps --json

    # Average over one past day (UTC)
    monero-tps tps --date 2024-01-15

    # Check whether a node answers
    monero-tps endpoints test http://node.c3pool.com:18081

CONFIG FILE:
    Default: ~/.config/monero-tps/config.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub nodes: NodeArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct NodeArgs {
    /// Use only this node (can be repeated)
    #[arg(long = "node", action = clap::ArgAction::Append, global = true)]
    pub node_urls: Vec<String>,

    /// Exclude a node from the pool (can be repeated)
    #[arg(long = "exclude-node", action = clap::ArgAction::Append, global = true)]
    pub exclude_nodes: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve(serve::ServeArgs),

    /// Compute TPS over the most recent blocks
    Tps(tps::TpsArgs),

    /// Manage and test nodes
    Endpoints {
        #[command(subcommand)]
        action: endpoints::EndpointCommands,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}

impl Cli {
    /// Load the config file named by `--config`, or the default one if present
    pub fn config_file(&self) -> anyhow::Result<Option<ConfigFile>> {
        match &self.config {
            Some(path) => Ok(Some(ConfigFile::load(path).with_context(|| {
                format!("loading config from {}", path.display())
            })?)),
            None => Ok(ConfigFile::load_default()?),
        }
    }

    /// Config file plus flags, for commands that only need the node settings
    pub fn load_rpc_config(&self) -> anyhow::Result<RpcConfig> {
        let config_file = self.config_file()?;
        Ok(self.rpc_config(config_file.as_ref()))
    }

    /// Merge file settings with `--node` / `--exclude-node`
    pub fn rpc_config(&self, config_file: Option<&ConfigFile>) -> RpcConfig {
        let mut rpc_config = config_file
            .map(ConfigFile::rpc_config)
            .unwrap_or_default();

        if !self.nodes.node_urls.is_empty() {
            rpc_config.endpoints = self
                .nodes
                .node_urls
                .iter()
                .map(EndpointConfig::new)
                .collect();
        }

        rpc_config.exclude(&self.nodes.exclude_nodes);
        rpc_config
    }
}
