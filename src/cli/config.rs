//! Configuration management commands

use clap::Subcommand;
use anyhow::bail;
use monero_tps::{default_endpoints, ConfigFile};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,

    /// Show current config
    Show,

    /// Write a config file listing the default settings and nodes
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn handle(action: &ConfigCommands, explicit: Option<&Path>) -> anyhow::Result<()> {
    let default_path = ConfigFile::default_path();
    let path = explicit.unwrap_or(default_path.as_path());

    match action {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }

        ConfigCommands::Show => {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                println!("# {}\n", path.display());
                println!("{}", content);
            } else {
                println!("No config file found at: {}", path.display());
                println!("\nDefaults in effect:\n");
                println!("{}", toml::to_string_pretty(&ConfigFile::default())?);
            }
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }

            let config = ConfigFile {
                endpoints: default_endpoints(),
                ..Default::default()
            };
            config.save(path)?;
            println!("Config written to {}", path.display());
        }
    }

    Ok(())
}
