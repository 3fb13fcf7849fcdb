//! SQLite storage implementation

use super::schema;
use crate::model::{EntryRecord, Staff};
use crate::Result;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite-backed store for staff and entry rows
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Staff Operations ==========

    /// List all staff members in insertion order
    pub fn list_staff(&self) -> Result<Vec<Staff>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM staff")?;

        let staff = stmt
            .query_map([], |row| {
                Ok(Staff {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(staff)
    }

    /// Insert a staff member. Inserting a name that already exists is a
    /// silent no-op, not an error.
    pub fn add_staff(&self, name: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO staff (name) VALUES (?1)",
            params![name],
        )?;
        Ok(())
    }

    /// Delete a staff member by id. Deleting an absent id succeeds with
    /// zero rows affected. Entries referencing the id are left in place.
    pub fn delete_staff(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM staff WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ========== Entry Operations ==========

    /// Insert an entry unconditionally. The referenced staff_id is not
    /// checked for existence, and date/blocks_cut are stored as given.
    pub fn add_entry(&self, staff_id: i64, date: &str, blocks_cut: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO entries (staff_id, date, blocks_cut) VALUES (?1, ?2, ?3)",
            params![staff_id, date, blocks_cut],
        )?;
        Ok(())
    }

    /// List entries joined to their staff member, optionally filtered to
    /// one staff id. Inner join: entries whose staff row was deleted are
    /// excluded.
    pub fn list_entries(&self, staff_id: Option<i64>) -> Result<Vec<EntryRecord>> {
        let base = "SELECT entries.id, staff.name, entries.date, entries.blocks_cut \
                    FROM entries JOIN staff ON staff.id = entries.staff_id";

        let row_to_record = |row: &rusqlite::Row| {
            Ok(EntryRecord {
                id: row.get(0)?,
                staff: row.get(1)?,
                date: row.get(2)?,
                blocks_cut: row.get(3)?,
            })
        };

        let entries = if let Some(staff_id) = staff_id {
            let mut stmt = self.conn.prepare(&format!("{base} WHERE staff.id = ?1"))?;
            let rows = stmt.query_map([staff_id], row_to_record)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        } else {
            let mut stmt = self.conn.prepare(base)?;
            let rows = stmt.query_map([], row_to_record)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        Ok(entries)
    }

    /// Delete an entry by id. Absent ids succeed, same as delete_staff.
    pub fn delete_entry(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ========== Bulk Operations ==========

    /// Delete all entries and all staff as one transaction. Irreversible.
    pub fn reset(&self) -> Result<()> {
        self.conn
            .execute_batch("BEGIN; DELETE FROM entries; DELETE FROM staff; COMMIT;")?;
        Ok(())
    }

    /// Rows for the CSV export: the unfiltered join, in the same order
    /// list_entries returns them.
    pub fn export_rows(&self) -> Result<Vec<(String, String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT staff.name, entries.date, entries.blocks_cut \
             FROM entries JOIN staff ON staff.id = entries.staff_id",
        )?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Count all staff members
    pub fn count_staff(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM staff", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all entries, including orphaned ones the join would hide
    pub fn count_entries(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            staff: self.count_staff()?,
            entries: self.count_entries()?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub staff: usize,
    pub entries: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Staff: {}", self.staff)?;
        writeln!(f, "  Entries: {}", self.entries)
    }
}
