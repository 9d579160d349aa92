//! In-memory record store shared across requests

use crate::core::Record;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Ordered, process-lifetime collection of records.
///
/// Cloning the store clones the handle, not the records. Uses a tokio RwLock so
/// a request pipeline can hold the write guard for its whole
/// read-validate-mutate sequence.
#[derive(Clone)]
pub struct InMemoryStore<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-populated with `records`, in order
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Snapshot of every record, in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Find a record by id
    pub async fn get(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Exclusive access to the records for one read-modify-write sequence
    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().await
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Plate {
        id: String,
        label: String,
    }

    impl Record for Plate {
        const KIND: &'static str = "Plate";

        fn resource_name() -> &'static str {
            "plates"
        }

        fn resource_name_singular() -> &'static str {
            "plate"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn plate(id: &str, label: &str) -> Plate {
        Plate {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store: InMemoryStore<Plate> = InMemoryStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_with_records_keeps_order() {
        let store = InMemoryStore::with_records(vec![plate("1", "a"), plate("2", "b")]);

        let ids: Vec<String> = store.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = InMemoryStore::with_records(vec![plate("1", "a"), plate("2", "b")]);

        assert_eq!(store.get("2").await, Some(plate("2", "b")));
        assert_eq!(store.get("3").await, None);
    }

    #[tokio::test]
    async fn test_write_guard_mutations_are_visible_to_clones() {
        let store = InMemoryStore::with_records(vec![plate("1", "a")]);
        let handle = store.clone();

        {
            let mut records = store.write().await;
            records.push(plate("2", "b"));
            records[0].label = "changed".to_string();
        }

        assert_eq!(handle.len().await, 2);
        assert_eq!(handle.get("1").await.unwrap().label, "changed");
    }
}
