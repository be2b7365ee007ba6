//! In-memory [`RowStore`] used for local runs and tests.
//!
//! Sheets live behind one `RwLock`, so `insert_unique` checks and appends
//! under the same write guard and is atomic with respect to other callers.

use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::services::{
    BackendStatus, BoxFuture, InsertOutcome, Row, RowMatch, RowStore, RowStoreError,
};

pub const MEMORY_STORE_TITLE: &str = "In-memory store";

#[derive(Debug, Default, Clone)]
struct MemorySheet {
    rows: Vec<Row>,
}

/// Row store backed by process memory. Owned by whoever builds it; nothing
/// here is global.
#[derive(Debug, Default)]
pub struct MemoryRowStore {
    title: String,
    sheets: RwLock<HashMap<String, MemorySheet>>,
    order: RwLock<Vec<String>>,
}

impl MemoryRowStore {
    pub fn new() -> Self {
        Self {
            title: MEMORY_STORE_TITLE.to_string(),
            ..Self::default()
        }
    }
}

impl RowStore for MemoryRowStore {
    fn list_rows(&self, sheet: &str) -> BoxFuture<'_, Vec<Row>, RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let sheets = self.sheets.read().await;
            let data = sheets
                .get(&sheet)
                .ok_or_else(|| RowStoreError::SheetNotFound(sheet.clone()))?;
            Ok(data.rows.clone())
        })
    }

    fn append_row(&self, sheet: &str, row: Row) -> BoxFuture<'_, (), RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let mut sheets = self.sheets.write().await;
            let data = sheets
                .get_mut(&sheet)
                .ok_or_else(|| RowStoreError::SheetNotFound(sheet.clone()))?;
            data.rows.push(row);
            Ok(())
        })
    }

    fn delete_rows(&self, sheet: &str, matcher: RowMatch) -> BoxFuture<'_, usize, RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let mut sheets = self.sheets.write().await;
            let data = sheets
                .get_mut(&sheet)
                .ok_or_else(|| RowStoreError::SheetNotFound(sheet.clone()))?;
            let before = data.rows.len();
            data.rows.retain(|row| !matcher.matches(row));
            Ok(before - data.rows.len())
        })
    }

    fn ensure_sheet(&self, sheet: &str, headers: &[&str]) -> BoxFuture<'_, (), RowStoreError> {
        let sheet = sheet.to_string();
        let headers = headers.join(", ");
        Box::pin(async move {
            let mut sheets = self.sheets.write().await;
            if !sheets.contains_key(&sheet) {
                debug!("Creating in-memory sheet {} with headers [{}]", sheet, headers);
                sheets.insert(sheet.clone(), MemorySheet::default());
                self.order.write().await.push(sheet);
            }
            Ok(())
        })
    }

    fn status(&self) -> BoxFuture<'_, BackendStatus, RowStoreError> {
        Box::pin(async move {
            Ok(BackendStatus {
                title: self.title.clone(),
                sheets: self.order.read().await.clone(),
            })
        })
    }

    fn insert_unique(
        &self,
        sheet: &str,
        matcher: RowMatch,
        row: Row,
    ) -> BoxFuture<'_, InsertOutcome, RowStoreError> {
        let sheet = sheet.to_string();
        Box::pin(async move {
            let mut sheets = self.sheets.write().await;
            let data = sheets
                .get_mut(&sheet)
                .ok_or_else(|| RowStoreError::SheetNotFound(sheet.clone()))?;
            if let Some(existing) = data.rows.iter().find(|r| matcher.matches(r)) {
                return Ok(InsertOutcome::Conflict(existing.clone()));
            }
            data.rows.push(row);
            Ok(InsertOutcome::Inserted)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn store_with_sheet() -> MemoryRowStore {
        let store = MemoryRowStore::new();
        store.ensure_sheet("Bookings", &["date", "name"]).await.unwrap();
        store
    }

    #[tokio::test]
    async fn missing_sheet_is_reported() {
        let store = MemoryRowStore::new();
        let err = store.list_rows("Bookings").await.unwrap_err();
        assert!(matches!(err, RowStoreError::SheetNotFound(name) if name == "Bookings"));
    }

    #[tokio::test]
    async fn ensure_sheet_is_idempotent() {
        let store = store_with_sheet().await;
        store
            .append_row("Bookings", row(&[("date", "2026-02-10")]))
            .await
            .unwrap();
        store.ensure_sheet("Bookings", &["other"]).await.unwrap();

        assert_eq!(store.list_rows("Bookings").await.unwrap().len(), 1);
        let status = store.status().await.unwrap();
        assert_eq!(status.title, MEMORY_STORE_TITLE);
        assert_eq!(status.sheets, vec!["Bookings".to_string()]);
    }

    #[tokio::test]
    async fn delete_rows_counts_removed_rows() {
        let store = store_with_sheet().await;
        for date in ["2026-02-10", "2026-02-14", "2026-02-10"] {
            store
                .append_row("Bookings", row(&[("date", date)]))
                .await
                .unwrap();
        }

        let removed = store
            .delete_rows("Bookings", RowMatch::exact("date", "2026-02-10"))
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert_eq!(store.list_rows("Bookings").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_unique_reports_the_existing_row() {
        let store = store_with_sheet().await;
        let first = row(&[("date", "2026-02-10"), ("name", "John Doe")]);
        let second = row(&[("date", "2026-02-10"), ("name", "Jane Smith")]);

        let outcome = store
            .insert_unique("Bookings", RowMatch::exact("date", "2026-02-10"), first.clone())
            .await
            .unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);

        let outcome = store
            .insert_unique("Bookings", RowMatch::exact("date", "2026-02-10"), second)
            .await
            .unwrap();
        assert_eq!(outcome, InsertOutcome::Conflict(first));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_for_one_key_succeed_once() {
        let store = Arc::new(store_with_sheet().await);
        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let name = format!("Guest {i}");
                store
                    .insert_unique(
                        "Bookings",
                        RowMatch::exact("date", "2026-02-10"),
                        row(&[("date", "2026-02-10"), ("name", name.as_str())]),
                    )
                    .await
                    .unwrap()
            }));
        }

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap() == InsertOutcome::Inserted {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.list_rows("Bookings").await.unwrap().len(), 1);
    }
}
