//! Node management commands

use clap::Subcommand;
use monero_tps::{Endpoint, EndpointConfig, RpcConfig};
use std::io::Write;

#[derive(Subcommand)]
pub enum EndpointCommands {
    /// List all configured nodes
    List,

    /// Probe a node and read its chain height
    Test {
        /// Node base URL (e.g. http://127.0.0.1:18081)
        url: String,
    },
}

pub async fn handle(action: &EndpointCommands, rpc_config: &RpcConfig) -> anyhow::Result<()> {
    match action {
        EndpointCommands::List => {
            println!("MONERO NODES ({} configured)\n", rpc_config.endpoints.len());

            for ep in &rpc_config.endpoints {
                println!(
                    "  {}{}{}",
                    ep.url,
                    if ep.enabled { "" } else { " [disabled]" },
                    ep.note
                        .as_ref()
                        .map(|n| format!(" ({})", n))
                        .unwrap_or_default()
                );
            }
            println!(
                "\nProbe timeout: {}s | Window: {} blocks",
                rpc_config.probe_timeout_secs, rpc_config.window
            );
        }

        EndpointCommands::Test { url } => {
            println!("Testing node: {}\n", url);

            let endpoint = Endpoint::new(EndpointConfig::new(url), rpc_config.request_timeout())?;

            print!("[1/3] Liveness probe.......... ");
            std::io::stdout().flush()?;
            match endpoint.probe(rpc_config.probe_timeout()).await {
                Ok(()) => println!("✓ OK"),
                Err(e) => {
                    println!("✗ FAILED: {}", e);
                    return Ok(());
                }
            }

            print!("[2/3] Node info............... ");
            std::io::stdout().flush()?;
            match endpoint.get_info().await {
                Ok(info) => println!(
                    "✓ {} height {}{}",
                    info.nettype.as_deref().unwrap_or("unknown net"),
                    info.height,
                    info.version
                        .as_ref()
                        .map(|v| format!(" (v{})", v))
                        .unwrap_or_default()
                ),
                Err(e) => println!("? UNKNOWN: {}", e),
            }

            print!("[3/3] Latest block............ ");
            std::io::stdout().flush()?;
            match endpoint.current_height().await {
                Ok(height) => match endpoint.get_block(height).await {
                    Ok(block) => println!(
                        "✓ Block {} ({} transactions)",
                        height,
                        block.transaction_count()
                    ),
                    Err(e) => println!("✗ FAILED: {}", e),
                },
                Err(e) => println!("✗ FAILED: {}", e),
            }

            println!("\nNode test complete.");
        }
    }

    Ok(())
}
