//! Addressmon CLI
//!
//! Serves the address monitor table, or renders it once to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use addressmon::{build_loader, load_config, render_once, Config};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "addressmon")]
#[command(about = "Address monitor table for observed hardware addresses")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the monitoring daemon (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Dashboard port (overrides config file)
    #[arg(long)]
    dashboard_port: Option<u16>,

    /// Render the table once to stdout and exit
    #[arg(long)]
    once: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, dashboard_port={:?}, once={}, log_level={:?}",
        args.config,
        args.base_url,
        args.dashboard_port,
        args.once,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.source.base_url = base_url;
    }
    if let Some(dashboard_port) = args.dashboard_port {
        config.dashboard.port = dashboard_port;
    }

    if args.once {
        let loader = build_loader(&config)?;
        return Ok(match render_once(&loader).await {
            Some(page) => {
                println!("{}", page);
                ExitCode::SUCCESS
            }
            None => ExitCode::FAILURE,
        });
    }

    tracing::info!("Starting addressmon, source {}", config.source.base_url);
    addressmon::run(config).await?;

    Ok(ExitCode::SUCCESS)
}
