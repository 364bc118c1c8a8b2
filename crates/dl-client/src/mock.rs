//! Mock record lookup for testing.

use crate::lookup::{LookupError, RecordLookup};
use async_trait::async_trait;
use dl_core::record::{DocumentCategory, PersonRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process [`RecordLookup`] double backed by a scripted record set.
///
/// Supports failure injection on both operations so callers can exercise
/// the empty-list policy and the request-failed path without a live service.
#[derive(Default)]
pub struct MockRecordLookup {
    records: Arc<RwLock<HashMap<i64, PersonRecord>>>,
    categories: Arc<RwLock<Vec<DocumentCategory>>>,
    search_failure: Arc<RwLock<Option<LookupError>>>,
    categories_fail: Arc<RwLock<bool>>,
    search_calls: AtomicU64,
}

impl MockRecordLookup {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the scripted set, keyed by document number.
    pub async fn insert_record(&self, record: PersonRecord) {
        let mut records = self.records.write().await;
        records.insert(record.document_number, record);
    }

    /// Replaces the scripted category list.
    pub async fn set_categories(&self, categories: Vec<DocumentCategory>) {
        *self.categories.write().await = categories;
    }

    /// Makes every subsequent search fail with the given error.
    pub async fn fail_searches_with(&self, error: LookupError) {
        *self.search_failure.write().await = Some(error);
    }

    /// Makes every subsequent category fetch fail.
    pub async fn fail_category_fetches(&self) {
        *self.categories_fail.write().await = true;
    }

    /// Number of search requests this mock has received.
    pub fn search_call_count(&self) -> u64 {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordLookup for MockRecordLookup {
    async fn fetch_document_categories(&self) -> Vec<DocumentCategory> {
        if *self.categories_fail.read().await {
            return Vec::new();
        }
        self.categories.read().await.clone()
    }

    async fn search_by_document_number(
        &self,
        document_number: i64,
    ) -> Result<Option<PersonRecord>, LookupError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.search_failure.read().await.clone() {
            return Err(error);
        }
        let records = self.records.read().await;
        Ok(records.get(&document_number).cloned())
    }
}
