//! Keysmith: password generation and placeholder proxy service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, builds the shared state and router, and starts
//! the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use keysmith::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use keysmith::server::start_server;
use keysmith::{create_router, AppState};

/// Keysmith: password generation and placeholder proxy service
#[derive(Parser, Debug)]
#[command(name = "keysmith", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "keysmith=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override http.host from the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Override http.port from the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

/// Load the config file. A missing file at the default path means "use defaults".
fn load_config(path: &str) -> Result<(AppConfig, bool), keysmith::config::ConfigError> {
    if path == DEFAULT_CONFIG_PATH && !Path::new(path).exists() {
        return Ok((AppConfig::default(), false));
    }
    AppConfig::load(path).map(|config| (config, true))
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut config, from_file) = load_config(&args.config)?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    if from_file {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::info!(path = %args.config, "No configuration file found, using defaults");
    }
    tracing::info!(
        upstream = %config.placeholders.base_url,
        max_post_id = config.placeholders.max_post_id,
        timeout_seconds = ?config.outbound.timeout_seconds,
        "Placeholder upstream configured"
    );

    let http_config = config.http.clone();
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    start_server(app, &http_config).await?;

    Ok(())
}
