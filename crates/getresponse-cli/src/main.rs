/*
[INPUT]:  CLI arguments, YAML configuration file, API_* environment variables
[OUTPUT]: JSON response of one GetResponse API call on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use getresponse_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "getresponse", version, about = "GetResponse v3 API command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Validate configuration and print the request URL without calling the API
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?;
    let client = config.build_client()?;
    info!(api_endpoint = %client.api_endpoint(), "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        println!("{}", args.command.url(&client)?);
        return Ok(());
    }

    let response = args
        .command
        .execute(&client)
        .await
        .context("GetResponse request failed")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("render response")?
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

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let mut config = match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            CliConfig::from_file(path_str).context("load config")?
        }
        None => CliConfig::default(),
    };
    config.apply_env();
    Ok(config)
}
