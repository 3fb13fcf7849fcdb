//! HTTP API - axum router over the SQLite store
//!
//! Each request maps to exactly one store operation. The store handle is
//! shared through [`AppState`] behind an async mutex, so every statement
//! runs as its own atomic unit of work.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod routes;

/// Server state
pub struct AppState {
    pub store: Mutex<SqliteStore>,
}

/// Build the router for a store. Split out from [`start_server`] so tests
/// can drive it with in-memory databases.
pub fn build_router(store: SqliteStore) -> Router {
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    Router::new()
        .route("/staff", get(routes::list_staff).post(routes::add_staff))
        .route("/staff/{id}", delete(routes::delete_staff))
        .route("/entry", post(routes::add_entry))
        .route("/entry/{id}", delete(routes::delete_entry))
        .route("/entries", get(routes::list_entries))
        .route("/reset", post(routes::reset))
        .route("/export", get(routes::export_csv))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    let store = SqliteStore::open(&database_path)?;
    let app = build_router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
