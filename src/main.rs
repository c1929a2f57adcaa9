//! greeting-server entry point.
//!
//! Initializes tracing, loads configuration from a TOML file, builds the Axum
//! router and runs the HTTP server until it receives a shutdown signal.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_server::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use greeting_server::create_router;
use greeting_server::http::start_server;

/// greeting-server: answers GET / with a fixed greeting
#[derive(Parser, Debug)]
#[command(name = "greeting-server", version, about)]
struct Args {
    /// Path to configuration file (defaults are used if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeting_server=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Bind address, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides http.port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration is loaded before tracing so the log format can be honored
    let (mut config, from_file) = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    if from_file {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::info!(path = %args.config, "Configuration file not found, using defaults");
    }

    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let app = create_router();
    start_server(app, &config.http).await?;

    Ok(())
}
