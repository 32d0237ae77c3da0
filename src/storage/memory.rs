//! 进程内条目存储

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::FaqStore;
use crate::error::StoreResult;
use crate::model::{FaqDraft, FaqEntry};

/// 基于 `BTreeMap` 的内存存储，迭代顺序即 id 顺序
#[derive(Debug)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<i64, FaqEntry>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FaqStore for MemoryStore {
    async fn insert(&self, draft: FaqDraft) -> StoreResult<FaqEntry> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entry = draft.into_entry(id);
        self.entries.write().await.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: i64, draft: FaqDraft) -> StoreResult<Option<FaqEntry>> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(&id) {
            Some(existing) => {
                *existing = draft.into_entry(id);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn get(&self, id: i64) -> StoreResult<Option<FaqEntry>> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn filter_by_language(&self, language: &str) -> StoreResult<Vec<FaqEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .values()
            .filter(|entry| entry.language.code() == language)
            .cloned()
            .collect())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.entries.read().await.len())
    }
}
