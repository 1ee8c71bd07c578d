//! Wagon Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from (first hit wins) `~/.config/wagon/config.toml`,
//! `/etc/wagon/config.toml`, `./config.toml`, then environment overrides:
//! - `WAGON_HOST`: Host to bind to (default: 0.0.0.0)
//! - `WAGON_PORT`: Port to listen on (default: 8080)
//! - `WAGON_PUBLIC_DIR`: Static file directory (default: public)
//! - `WAGON_EXPLOIT_DATA`: Exploit listing data file
//! - `RUST_LOG`: Log filter (overrides the [logging] level)

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wagon::api::{serve, AppState};
use wagon::config::{generate_default_config, Config};
use wagon::games::GameCatalog;

#[derive(Parser)]
#[command(name = "wagon", version, about = "The Wagon site server")]
struct Cli {
    /// Path to a config file (overrides the default search locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Directory static files are served from
    #[arg(long)]
    public_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a commented default config file to stdout
    GenerateConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::GenerateConfig) = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // Load configuration, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.public_dir {
        config.server.public_dir = dir;
    }

    init_tracing(&config);

    tracing::info!("Starting Wagon server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Public directory: {:?}", config.server.public_dir);
    tracing::info!("Exploit data file: {:?}", config.catalog.exploit_data);

    let state = AppState::build(config, GameCatalog::builtin()).await;

    serve(state).await?;

    tracing::info!("Wagon server stopped");
    Ok(())
}

/// Initialize tracing from the [logging] config; RUST_LOG wins when set
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "wagon={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
