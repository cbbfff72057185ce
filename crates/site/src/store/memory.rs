//! In-process resource store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mars_paper_core::RecordId;
use serde_json::Value;

use super::{Collection, ResourceStore, Row, SortOrder, StoreError};

/// Resource store backed by in-memory tables.
///
/// Assigns UUID ids and `created_at` timestamps like the real store. Counts
/// every call it receives and can be switched into a failing state, which
/// lets tests assert that validation short-circuits before any store call
/// and that store failures are reported.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Collection, Vec<Row>>>,
    operations: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls made so far.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Insert a row with an explicit creation time, bypassing the counter.
    ///
    /// Returns the assigned id.
    pub fn seed(&self, collection: Collection, mut row: Row, created_at: DateTime<Utc>) -> String {
        let id = new_id();
        row.insert("id".to_string(), Value::String(id.clone()));
        row.insert(
            "created_at".to_string(),
            Value::String(created_at.to_rfc3339()),
        );
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(collection)
            .or_default()
            .push(row);
        id
    }

    /// Snapshot of a collection's rows in insertion order.
    #[must_use]
    pub fn rows(&self, collection: Collection) -> Vec<Row> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    fn begin(&self, op: &str, collection: Collection) -> Result<(), StoreError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "{op} on {collection} rejected"
            )));
        }
        Ok(())
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn row_id(row: &Row) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

fn created_at(row: &Row) -> Option<DateTime<Utc>> {
    row.get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn insert(&self, collection: Collection, mut row: Row) -> Result<Row, StoreError> {
        self.begin("insert", collection)?;
        row.insert("id".to_string(), Value::String(new_id()));
        row.insert(
            "created_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        tables.entry(collection).or_default().push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        row: Row,
    ) -> Result<Row, StoreError> {
        self.begin("update", collection)?;

        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let existing = tables
            .get_mut(&collection)
            .and_then(|rows| rows.iter_mut().find(|r| row_id(r) == Some(id.as_str())))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.clone(),
            })?;

        for (key, value) in row {
            if key != "id" && key != "created_at" {
                existing.insert(key, value);
            }
        }
        Ok(existing.clone())
    }

    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<(), StoreError> {
        self.begin("delete", collection)?;

        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(rows) = tables.get_mut(&collection) {
            rows.retain(|r| row_id(r) != Some(id.as_str()));
        }
        Ok(())
    }

    async fn list(&self, collection: Collection, order: SortOrder) -> Result<Vec<Row>, StoreError> {
        self.begin("list", collection)?;

        let mut rows = self.rows(collection);
        // Stable sort keeps insertion order for equal timestamps.
        rows.sort_by_key(created_at);
        if order == SortOrder::Descending {
            rows.reverse();
        }
        Ok(rows)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = MemoryStore::new();
        let stored = store
            .insert(Collection::Products, row(json!({"slug": "a4"})))
            .await
            .unwrap();
        assert!(stored["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(stored["created_at"].is_string());
        assert_eq!(store.operation_count(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let id = RecordId::parse("missing").unwrap();
        let err = store
            .update(Collection::Products, &id, row(json!({"slug": "a4"})))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let store = MemoryStore::new();
        let inserted = store
            .insert(Collection::Products, row(json!({"slug": "a4"})))
            .await
            .unwrap();
        let id = RecordId::parse(inserted["id"].as_str().unwrap()).unwrap();

        let updated = store
            .update(
                Collection::Products,
                &id,
                row(json!({"slug": "a3", "id": "hijack"})),
            )
            .await
            .unwrap();
        assert_eq!(updated["slug"], "a3");
        assert_eq!(updated["id"], inserted["id"]);
        assert_eq!(updated["created_at"], inserted["created_at"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        let id = RecordId::parse("gone").unwrap();
        store.delete(Collection::GalleryItems, &id).await.unwrap();
        store.delete(Collection::GalleryItems, &id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_orders_by_created_at() {
        let store = MemoryStore::new();
        let early = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap();
        store.seed(Collection::ContactMessages, row(json!({"first_name": "Late"})), late);
        store.seed(Collection::ContactMessages, row(json!({"first_name": "Early"})), early);

        let asc = store
            .list(Collection::ContactMessages, SortOrder::Ascending)
            .await
            .unwrap();
        assert_eq!(asc[0]["first_name"], "Early");

        let desc = store
            .list(Collection::ContactMessages, SortOrder::Descending)
            .await
            .unwrap();
        assert_eq!(desc[0]["first_name"], "Late");
    }

    #[tokio::test]
    async fn test_failing_switch() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let err = store
            .list(Collection::TeamMembers, SortOrder::Ascending)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(store.operation_count(), 1);
    }
}
