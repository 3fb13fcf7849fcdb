//! CSV export of entry data
//!
//! Serializes the unfiltered staff/entry join as CSV with a fixed header,
//! one row per joined entry. Orphaned entries are excluded by the join, so
//! the export always matches what `GET /entries` would return.

use crate::storage::SqliteStore;
use crate::Result;
use chrono::NaiveDate;

/// Header row for the export
pub const CSV_HEADER: [&str; 3] = ["Staff Name", "Date", "Blocks Cut"];

/// Serialize all joined entries as CSV bytes
pub fn export_csv(store: &SqliteStore) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (name, date, blocks_cut) in store.export_rows()? {
        writer.write_record([name, date, blocks_cut.to_string()])?;
    }

    writer
        .into_inner()
        .map_err(|e| crate::Error::Io(e.into_error()))
}

/// Filename for a CSV download on the given date,
/// e.g. `block_data_export_20240115.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("block_data_export_{}.csv", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_id(store: &SqliteStore, name: &str) -> i64 {
        store
            .list_staff()
            .unwrap()
            .into_iter()
            .find(|s| s.name == name)
            .map(|s| s.id)
            .unwrap()
    }

    #[test]
    fn test_export_header_only_when_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        let bytes = export_csv(&store).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Staff Name,Date,Blocks Cut\n");
    }

    #[test]
    fn test_export_two_entries() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.add_staff("Alice").unwrap();
        store.add_staff("Bob").unwrap();
        store.add_entry(staff_id(&store, "Alice"), "2024-01-01", 5).unwrap();
        store.add_entry(staff_id(&store, "Bob"), "2024-01-02", 7).unwrap();

        let bytes = export_csv(&store).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Staff Name,Date,Blocks Cut\nAlice,2024-01-01,5\nBob,2024-01-02,7\n"
        );
    }

    #[test]
    fn test_export_quotes_embedded_commas() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.add_staff("Smith, Jane").unwrap();
        store.add_entry(staff_id(&store, "Smith, Jane"), "2024-01-01", 3).unwrap();

        let bytes = export_csv(&store).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Staff Name,Date,Blocks Cut\n\"Smith, Jane\",2024-01-01,3\n"
        );
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(export_filename(date), "block_data_export_20240115.csv");
    }
}
