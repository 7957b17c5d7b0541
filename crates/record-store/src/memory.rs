use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Record, RecordStore, Result, StoreError};

/// In-memory record store for local runs and tests.
///
/// Provides the same semantics as the PostgreSQL implementation, plus
/// switches to simulate an unavailable backend and a counter of `put`
/// calls so tests can assert that nothing was written.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    collections: Arc<RwLock<HashMap<String, Vec<Record>>>>,
    fail_on_put: Arc<AtomicBool>,
    fail_on_scan: Arc<AtomicBool>,
    put_calls: Arc<AtomicUsize>,
}

impl InMemoryRecordStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `put` fail.
    pub fn set_fail_on_put(&self, fail: bool) {
        self.fail_on_put.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `scan_all` fail.
    pub fn set_fail_on_scan(&self, fail: bool) {
        self.fail_on_scan.store(fail, Ordering::SeqCst);
    }

    /// Returns how many times `put` was called, including failed calls.
    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    /// Returns the number of records stored in a collection.
    pub async fn record_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Clears all collections.
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put(&self, collection: &str, record: Record) -> Result<()> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_put.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "write to collection '{collection}' rejected"
            )));
        }

        let mut collections = self.collections.write().await;
        let records = collections.entry(collection.to_string()).or_default();

        match records.iter_mut().find(|r| r.key == record.key) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }

        Ok(())
    }

    async fn scan_all(&self, collection: &str) -> Result<Vec<Record>> {
        if self.fail_on_scan.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "scan of collection '{collection}' rejected"
            )));
        }

        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }
}
