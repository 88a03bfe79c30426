// ============================================================
// Layer 2 — List Use Case
// ============================================================
// One full read-only pass over the record store, in append
// order. No validation, no writes — listing after a rejected
// submit returns exactly what it returned before it.
//
// Reference: Rust Book §13 (Iterators)

use crate::domain::error::StoreError;
use crate::domain::traits::RecordSource;
use crate::domain::user_record::UserRecord;

/// Reads back every stored record.
pub struct ListUseCase<S> {
    store: S,
}

impl<S: RecordSource> ListUseCase<S> {
    /// Create a new ListUseCase over a record source.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All previously appended records, oldest first.
    /// Drains one lazy pass into a Vec for the presentation
    /// layer; an empty or missing store yields an empty Vec.
    pub fn execute(&self) -> Result<Vec<UserRecord>, StoreError> {
        let records: Vec<UserRecord> = self.store.list_all()?.collect::<Result<_, _>>()?;
        tracing::debug!("Listed {} stored records", records.len());
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::RecordSink;
    use crate::infra::record_store::FileRecordStore;
    use tempfile::tempdir;

    #[test]
    fn test_lists_records_in_append_order() {
        let dir       = tempdir().unwrap();
        let path      = dir.path().join("user_data.txt");
        let mut store = FileRecordStore::new(&path);

        store
            .append(&UserRecord::validated("Jane Doe", "jane@example.com", "30").unwrap())
            .unwrap();
        store
            .append(&UserRecord::validated("Sam", "sam@x.org", "65").unwrap())
            .unwrap();

        let records = ListUseCase::new(FileRecordStore::new(&path)).execute().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Jane Doe");
        assert_eq!(records[1].name, "Sam");
    }

    #[test]
    fn test_empty_store_lists_empty() {
        let dir = tempdir().unwrap();
        let uc  = ListUseCase::new(FileRecordStore::new(dir.path().join("user_data.txt")));
        assert!(uc.execute().unwrap().is_empty());
    }
}
