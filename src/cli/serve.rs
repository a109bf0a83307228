//! Web server command

use clap::Args;
use monero_tps::config::DEFAULT_BIND;
use monero_tps::{ConfigFile, RpcConfig, ServerConfig, TpsFetcher};

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "MONERO_TPS_BIND")]
    pub bind: Option<String>,
}

pub async fn handle(
    args: &ServeArgs,
    rpc_config: RpcConfig,
    config_file: Option<&ConfigFile>,
) -> anyhow::Result<()> {
    let bind = args
        .bind
        .clone()
        .or_else(|| config_file.map(|c| c.settings.bind.clone()))
        .unwrap_or_else(|| DEFAULT_BIND.to_string());

    let server_config = ServerConfig::from_bind(&bind)?;
    let fetcher = TpsFetcher::new(&rpc_config)?;

    tracing::info!(
        "Serving TPS over the last {} blocks from {} candidate nodes",
        fetcher.window(),
        fetcher.endpoint_count()
    );

    monero_tps::server::serve(&server_config, fetcher).await;
    Ok(())
}
