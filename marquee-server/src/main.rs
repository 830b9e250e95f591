use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use marquee_config::{ConfigLoad, ConfigLoader};
use marquee_server::{AppState, create_app, infra::telemetry::init_tracing};
use tracing::{info, warn};

/// CLI entry point. Environment variables are read by `ConfigLoader` only.
#[derive(Parser, Debug)]
#[command(name = "marquee-server")]
#[command(about = "Movie lookup gateway in front of the TMDB API")]
struct Cli {
    /// Path to a TOML config file (overrides MARQUEE_CONFIG_PATH and the
    /// default locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server host (overrides SERVER_HOST and the config file)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides SERVER_PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    init_tracing();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "loaded config file");
    }
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    if config.tmdb.has_api_key() {
        info!(base_url = %config.tmdb.base_url, "TMDB API key configured");
    } else {
        warn!("TMDB_API_KEY is not set; upstream lookups will be rejected");
    }

    let addr = config.server.bind_address();
    let state = AppState::new(Arc::new(config))
        .context("failed to build TMDB client")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Starting Marquee gateway on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
