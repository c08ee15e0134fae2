mod cli;
mod logging;

use anyhow::Context;
use cb_core::ArticleStore;
use cb_web::{create_app, AppState};
use clap::Parser;
use cli::{Cli, Commands, ServeArgs};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

async fn check_storage(store: &Arc<dyn ArticleStore>) -> anyhow::Result<()> {
    let articles = tokio::time::timeout(CHECK_TIMEOUT, store.list_recent(1))
        .await
        .context("Storage health check timed out")??;

    info!(
        "🏦 Storage backend reachable (using {}, {} article(s) sampled)",
        store.name(),
        articles.len()
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn serve(store: Arc<dyn ArticleStore>, args: ServeArgs) -> anyhow::Result<()> {
    let mut state = AppState::new(store);
    if let Some(dir) = args.assets_dir {
        info!("Serving assets from {}", dir.display());
        state = state.with_assets_dir(dir);
    }

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    info!("☕ Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let store = cb_storage::open_store(&cli.storage.to_config())
        .await
        .context("Failed to open article store")?;

    match cli.command {
        Commands::Serve(args) => serve(store, args).await,
        Commands::Check => check_storage(&store).await,
    }
}
