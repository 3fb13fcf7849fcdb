//! # Blocktally - Block Cutting Productivity Tracker
//!
//! Record-keeping backend for staff members and their daily "blocks cut"
//! counts.
//!
//! Blocktally provides:
//! - SQLite-backed storage for staff and daily entry rows
//! - A REST API (axum) to create/list/delete staff and entries
//! - CSV export of all recorded entries
//! - A small CLI for serving, inspecting, and exporting the database

pub mod config;
pub mod export;
pub mod model;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use model::{EntryRecord, Staff};
pub use storage::SqliteStore;

/// Result type alias for Blocktally operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Blocktally operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
