//! Webhook server entrypoint for gameday
//!
//! This is the main binary that wires together all layers using dependency
//! injection: configuration → engine/store → platform client → axum server.

use anyhow::Result;
use clap::Parser;
use gameday_domain::QuorumEngine;
use gameday_infrastructure::{ConfigLoader, EventIngestor, InMemorySessionStore, LineClient};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod webhook;

use webhook::AppState;

/// CLI arguments for the gameday server
#[derive(Parser, Debug)]
#[command(name = "gameday")]
#[command(version, about = "Game-session bot - quorum signups over chat webhooks")]
struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable loading of configuration files (built-in defaults + env only)
    #[arg(long)]
    no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    show_config: bool,

    /// Override the listen address from configuration
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.validate()?;

    // === Dependency Injection ===
    let catalog = Arc::new(config.session.catalog()?);
    let policy = config.session.policy()?;
    let engine = QuorumEngine::new(Arc::clone(&catalog), policy);
    let store = Arc::new(InMemorySessionStore::new(engine));
    let gateway = Arc::new(LineClient::new(config.line.channel_access_token.as_str()));
    let ingestor = EventIngestor::new(config.session.command_prefix.as_str());

    let state = AppState {
        store,
        gateway,
        ingestor: Arc::new(ingestor),
        catalog,
        channel_secret: config.line.channel_secret.clone(),
    };

    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());
    info!(
        %bind,
        quorum = policy.threshold(),
        options = state.catalog.len(),
        "starting gameday"
    );

    let app = webhook::router(state).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
