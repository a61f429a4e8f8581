//! Filmoteca Server - Movie Catalog Daemon
//!
//! A small Rust HTTP server that:
//! - Serves a CRUD JSON API for an in-memory movie collection
//! - Validates write payloads against the movie schema
//! - Gates cross-origin requests through a fixed allow-list
//!
//! The store is seeded once from a JSON catalog file and lives only for
//! the process lifetime.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod router;
mod state;
#[cfg(test)]
mod test_helpers;

use filmoteca_core::{load_catalog, CorsGate};

use cli::Cli;
use router::build_router;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&cli.log_level)).init();

    info!("🚀 Filmoteca starting on port {}...", cli.port);

    let catalog = load_catalog(&cli.movies_file)
        .with_context(|| format!("failed to seed movie store from {}", cli.movies_file.display()))?;

    let state = AppState::new(catalog, CorsGate::default());
    info!("🎬 {} movies seeded into the store", state.movie_count().await);

    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("🌐 Server listening on http://localhost:{}", cli.port);
    axum::serve(listener, app).await?;

    Ok(())
}
