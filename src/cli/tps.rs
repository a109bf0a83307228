//! One-shot TPS computation

use chrono::NaiveDate;
use clap::Args;
use monero_tps::{RpcConfig, TpsFetcher, TpsReport};
use std::time::Instant;

#[derive(Args)]
pub struct TpsArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of trailing blocks (overrides config)
    #[arg(short = 'n', long)]
    pub blocks: Option<u64>,

    /// Measure a past UTC day instead of the latest blocks (YYYY-MM-DD)
    #[arg(long, conflicts_with = "blocks")]
    pub date: Option<NaiveDate>,
}

pub async fn handle(args: &TpsArgs, mut rpc_config: RpcConfig, quiet: bool) -> anyhow::Result<()> {
    if let Some(blocks) = args.blocks {
        rpc_config.window = blocks;
    }

    let fetcher = TpsFetcher::new(&rpc_config)?;
    let start = Instant::now();

    match args.date {
        Some(date) => {
            if !quiet {
                eprintln!(
                    "Averaging the blocks mined on {} ({} candidate nodes)...",
                    date,
                    fetcher.endpoint_count()
                );
            }

            let daily = fetcher.fetch_day(date).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&daily)?);
            } else {
                println!("Date:          {}", daily.date);
                print_report(&daily.report);
            }
        }
        None => {
            if !quiet {
                eprintln!(
                    "Averaging the last {} blocks ({} candidate nodes)...",
                    fetcher.window(),
                    fetcher.endpoint_count()
                );
            }

            let report = fetcher.fetch_current().await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    if !quiet {
        eprintln!("Done in {:.2}s", start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn print_report(report: &TpsReport) {
    println!("Blocks:        {}..={}", report.start_height, report.end_height);
    println!("Transactions:  {}", report.total_transactions);
    println!("Time span:     {}s", report.time_diff);
    println!("TPS:           {:.4}", report.tps);
}
