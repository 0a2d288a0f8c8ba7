//! Per-Record Update Locks
//!
//! Two concurrent updates to the same record could each write a new
//! attachment and then one "delete old" step would remove the other's
//! freshly-written file. Updates and deletes for a given record take
//! this lock across the whole replace-then-persist window.

use std::collections::HashMap;
use std::sync::Mutex;

use kernel::id::EmployeeId;
use std::sync::Arc;
use uuid::Uuid;

/// Keyed set of per-record async mutexes
///
/// Entries are never evicted; the map is bounded by the number of
/// records ever touched in this process.
#[derive(Default)]
pub struct RecordLocks {
    inner: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl RecordLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the lock for a record
    pub fn lock_for(&self, employee_id: &EmployeeId) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(employee_id.into_uuid())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_record_shares_a_lock() {
        let locks = RecordLocks::new();
        let id = EmployeeId::new();
        let a = locks.lock_for(&id);
        let b = locks.lock_for(&id);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_different_records_have_distinct_locks() {
        let locks = RecordLocks::new();
        let a = locks.lock_for(&EmployeeId::new());
        let b = locks.lock_for(&EmployeeId::new());
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
