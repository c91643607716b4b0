//! `trackctl config`

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{config_path, TrackctlConfig, CONFIG_TEMPLATE};

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a starter config to ~/.trackctl/config.toml
    Init(InitArgs),
    /// Print the effective config (user file merged with ./trackctl.toml)
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = config_path().context("Could not determine home directory")?;

    if config_path.exists() && !args.force {
        return Err(anyhow!(
            "Config already exists at {}\n\nUse --force to overwrite",
            config_path.display()
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .context(format!("Failed to write config file: {}", config_path.display()))?;

    println!("Created config at: {}", config_path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    print!("{}", TrackctlConfig::load().to_toml()?);
    Ok(())
}

fn run_path() -> Result<()> {
    let config_path = config_path().context("Could not determine home directory")?;
    println!("{}", config_path.display());
    Ok(())
}
