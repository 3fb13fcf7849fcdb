//! Database schema definitions

/// SQL to create the staff table
pub const CREATE_STAFF_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS staff (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
)
"#;

/// SQL to create the entries table
///
/// The foreign key is declarative only: deleting a staff row does not
/// cascade, so an entry may reference a staff id that no longer exists.
/// Readers hide such rows behind an inner join.
pub const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    staff_id INTEGER,
    date TEXT,
    blocks_cut INTEGER,
    FOREIGN KEY (staff_id) REFERENCES staff(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_entries_staff_id ON entries(staff_id)",
    "CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_STAFF_TABLE, CREATE_ENTRIES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
