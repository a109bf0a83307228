//! monero-tps CLI - Live Monero transaction throughput

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging; the server logs node selection at info by default
    let filter = match (cli.verbose, &cli.command) {
        (0, Commands::Serve(_)) => "info",
        (0, _) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    match &cli.command {
        // Config commands must work even when the file is broken
        Commands::Config { action } => cli::config::handle(action, cli.config.as_deref()),
        Commands::Serve(args) => {
            let config_file = cli.config_file()?;
            let rpc_config = cli.rpc_config(config_file.as_ref());
            cli::serve::handle(args, rpc_config, config_file.as_ref()).await
        }
        Commands::Tps(args) => {
            let rpc_config = cli.load_rpc_config()?;
            cli::tps::handle(args, rpc_config, cli.quiet).await
        }
        Commands::Endpoints { action } => {
            let rpc_config = cli.load_rpc_config()?;
            cli::endpoints::handle(action, &rpc_config).await
        }
    }
}
