/*
[INPUT]:  CLI arguments, YAML configuration file, wallet key from environment
[OUTPUT]: JSON result of one IHL / FiatConnect operation on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ihl_cli::config::default_config_path;
use ihl_cli::{CliConfig, Command, Session};

#[derive(Parser, Debug)]
#[command(name = "ihl", version, about = "In-house-liquidity and FiatConnect client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and exit
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config_path = args.config_path.unwrap_or_else(default_config_path);
    info!(
        config_path = %config_path.display(),
        dry_run = args.dry_run,
        "starting ihl"
    );

    let config = CliConfig::from_file(&config_path).context("load config")?;
    let session = Session::from_config(&config, |name| std::env::var(name).ok())
        .context("initialize session")?;
    info!(ihl_url = config.ihl_url(), network = ?config.network, "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let output = session.execute(&args.command).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render output")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
