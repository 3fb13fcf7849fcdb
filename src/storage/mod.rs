//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - staff(id, name)
//! - entries(id, staff_id, date, blocks_cut)
//!
//! Schema creation is idempotent and runs on open. Staff names are unique;
//! entries keep a non-cascading reference to their staff row.

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, SqliteStore};
