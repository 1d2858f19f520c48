mod app;
mod config;
mod diagnostics;
mod handlers;
mod port;
mod state;
mod storage;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    app::create_app,
    config::Config,
    port::bind_with_probe,
    state::AppState,
    storage::{open_with_fallback, Fallback, StorageBackend},
};

/// itemstore - CRUD REST API for items
#[derive(Parser, Debug)]
#[command(name = "itemstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8000", env = "PORT")]
    port: u16,

    /// Try the next ports when the requested one is busy
    #[arg(long, env = "PROBE_PORT")]
    probe_port: bool,

    /// Store backend to serve from
    #[arg(long, value_enum, default_value = "postgres", env = "STORAGE_BACKEND")]
    storage: StorageBackend,

    /// Store to use when the primary backend fails to initialize
    #[arg(long, value_enum, default_value = "none", env = "STORAGE_FALLBACK")]
    fallback: Fallback,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10", env = "REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,

    /// Print the resolved configuration and check PostgreSQL reachability, then exit
    #[arg(long)]
    check_env: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    if cli.check_env {
        return diagnostics::run(&config, &cli.host, cli.port).await;
    }

    let items = open_with_fallback(cli.storage, cli.fallback, &config)
        .await
        .context("failed to initialize item store")?;
    tracing::info!(storage = items.backend_name(), "Item store ready");

    let state = AppState::new(items)
        .with_info(config.app.clone())
        .with_request_timeout(Duration::from_secs(cli.request_timeout_secs));

    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => bind_with_probe(&cli.host, cli.port, cli.probe_port).await?,
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Install the global subscriber. `LOG_FORMAT=json` selects JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "itemstore=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
