use super::types::Record;

use parking_lot::RwLock;

/// Append-only in-memory record sequence.
///
/// The only mutation is `append`, a single synchronous operation under the
/// write lock, so every call is atomic from the point of view of concurrent
/// readers. Nothing is persisted; the store lives and dies with the process.
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// Appends a new record with `id = current size + 1` and returns it.
    ///
    /// Validation is the caller's job; the store accepts whatever it is given.
    pub fn append(&self, date: String, department: String, town: String) -> Record {
        let mut records = self.records.write();
        let record = Record {
            id: records.len() as u64 + 1,
            date,
            department,
            town,
        };
        records.push(record.clone());
        record
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
