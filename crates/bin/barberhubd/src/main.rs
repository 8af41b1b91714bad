//! # barberhubd — BarberHub daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize logging, the `SQLite` connection pool, and migrations
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, bind to a TCP port, and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use barberhub_adapter_http_axum::state::AppState;
use barberhub_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqliteBarbershopRepository};
use barberhub_app::services::directory_service::DirectoryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let repo = SqliteBarbershopRepository::new(pool.clone());
    let diagnostics_repo = SqliteBarbershopRepository::new(pool);

    // Services
    let directory_service = DirectoryService::new(repo);

    // HTTP
    let state = AppState::new(directory_service, diagnostics_repo);
    let app = barberhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "barberhubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
