//! todo-server – entry point.
//!
//! Startup order:
//! 1. Parse configuration from environment variables.
//! 2. Initialise structured tracing (JSON or human-readable).
//! 3. Compile the fragment templates.
//! 4. Open the configured record store and optionally seed the demo tasks.
//! 5. Build the Axum router and start the HTTP server with graceful shutdown.

mod config;
mod error;
mod middleware;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use todo_render::Renderer;
use tracing::{info, warn};

use crate::config::{Config, StoreBackend};
use crate::state::AppState;
use crate::store::{MemoryStore, SqliteStore, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Configuration ───────────────────────────────────────────────────────
    let cfg = Config::from_env().context("invalid configuration")?;

    // ── 2. Tracing ─────────────────────────────────────────────────────────────
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match cfg.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: TODO_LOG='{}' is not a valid tracing filter ({}); \
                     falling back to 'info'",
                    cfg.log_level, e
                );
                tracing_subscriber::EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(version = env!("CARGO_PKG_VERSION"), store = %cfg.store, "todo-server starting");

    // ── 3. Templates ───────────────────────────────────────────────────────────
    let renderer = Renderer::new().context("failed to compile templates")?;

    // ── 4. Record store ────────────────────────────────────────────────────────
    match cfg.store {
        StoreBackend::Memory => serve(cfg, MemoryStore::new(), renderer).await,
        StoreBackend::Sqlite => {
            let store = SqliteStore::connect(&cfg.database_url)
                .await
                .with_context(|| format!("failed to open database {}", cfg.database_url))?;
            info!(database_url = %cfg.database_url, "database ready");
            serve(cfg, store, renderer).await
        }
    }
}

// ── 5. HTTP server with graceful shutdown ──────────────────────────────────────
async fn serve<S: TodoStore>(cfg: Config, store: S, renderer: Renderer) -> anyhow::Result<()> {
    if cfg.seed_demo {
        store::seed_demo(&store).await.context("failed to seed demo tasks")?;
    }

    let addr: SocketAddr = cfg
        .bind_address
        .parse()
        .with_context(|| format!("invalid bind address {}", cfg.bind_address))?;
    let state = Arc::new(AppState::new(cfg, store, renderer));
    let app = routes::build(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("todo-server stopped");
    Ok(())
}

/// Returns a future that resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => { s.recv().await; }
            Err(e)    => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c   => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
