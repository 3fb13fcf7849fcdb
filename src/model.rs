//! Domain types - staff members and their daily entries
//!
//! Two persisted entities:
//! - `Staff`: a tracked worker identified by unique name
//! - an entry row: one dated blocks-cut count attributed to a staff member
//!
//! Entries are only ever read through the join with staff, so the read-side
//! type is `EntryRecord` (entry fields plus the staff *name*). Entries whose
//! staff row has been deleted never surface through that join.

use serde::{Deserialize, Serialize};

/// A staff member.
///
/// `id` is assigned by the store; `name` is unique across all staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
}

/// One joined entry row: an entry plus the name of the staff member it
/// belongs to. This is the shape returned by entry listings and the shape
/// the CSV export flattens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: i64,
    /// Name of the referenced staff member (surfaced as `staff`, not
    /// `staff_name`, to match the wire format).
    pub staff: String,
    /// Stored as given; the store does not parse or validate dates.
    pub date: String,
    pub blocks_cut: i64,
}
