//! Condensate daemon and one-shot CLI for the deterministic L3 condenser.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use condensate_core::CondensateConfig;
use condensate_engine::Condenser;
use condensate_server::{app_with_state, state::AppState};

/// Condensate - deterministic memory condensation, no LLM required
#[derive(Parser)]
#[command(name = "condensate")]
#[command(version)]
pub struct Cli {
    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server (default command)
    Serve,
    /// Condense a file (or stdin) and print the result as JSON
    Condense {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CondensateConfig::load(path)?,
        None => CondensateConfig::discover()?,
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Condense { file } => condense_once(&config, file.as_deref()),
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,condensate=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: CondensateConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config.engine)?;
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Condensate listening on {addr}");
    axum::serve(listener, app_with_state(state)).await?;
    Ok(())
}

fn condense_once(config: &CondensateConfig, file: Option<&Path>) -> anyhow::Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let condenser = Condenser::from_config(&config.engine)?;
    let result = condenser.condense(&text);
    println!("{}", result.to_json_pretty()?);
    Ok(())
}
