use anyhow::Result;
use clap::Parser;
use postino_ledger::{JsonFileLedger, ReferenceLedger};
use postino_server::{keepalive_router, RelayConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Postino file-to-link relay", long_about = None)]
struct Args {
    /// Path to the relay configuration file
    #[arg(short, long, default_value = "postino.toml")]
    config: PathBuf,

    /// Override the keepalive port from the config
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = RelayConfig::from_file(&args.config)?;

    let ledger = JsonFileLedger::load(&config.ledger_path).await?;
    info!(
        bot = %config.bot_username,
        entries = ledger.len().await,
        gated = config.gate.is_some(),
        ephemeral = config.ephemeral.is_some(),
        "Relay state ready"
    );

    let port = args.port.unwrap_or(config.port);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "Keepalive endpoint listening");

    axum::serve(listener, keepalive_router()).await?;
    Ok(())
}
