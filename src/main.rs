use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cache;
mod config;
mod dashboard;
mod mcp;
mod plfs;
mod server;

use config::{AppConfig, CliConfig, FileConfig};
use dashboard::DashboardAssembler;
use mcp::McpClient;
use server::{run_server, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to an optional TOML config file. TOML values override CLI.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// URL of the MoSPI MCP endpoint.
    #[clap(long)]
    pub mcp_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        mcp_url: cli_args.mcp_url,
    };

    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "starting plfs-tracker-server on port {} against {}",
        config.port, config.mcp.url
    );

    let client = McpClient::new(config.mcp.clone())?;
    let assembler = Arc::new(DashboardAssembler::new(Arc::new(client)));

    run_server(config.server_config(), assembler).await
}
