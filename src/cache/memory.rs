//! 进程内缓存
//!
//! 值以 JSON 字符串保存，与外部键值存储的行为保持一致：反序列化失败的
//! 条目会被删除并视为未命中。

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{CacheStats, FaqCache};
use crate::error::CacheResult;
use crate::model::FaqEntry;

/// 缓存配置
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheConfig {
    /// `None` 表示永久缓存，直到被写入流程覆盖
    pub ttl: Option<Duration>,
}

#[derive(Debug)]
struct CachedCollection {
    payload: String,
    stored_at: Instant,
}

impl CachedCollection {
    fn is_expired(&self, ttl: Option<Duration>) -> bool {
        ttl.is_some_and(|ttl| self.stored_at.elapsed() >= ttl)
    }
}

/// 基于 `DashMap` 的缓存
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CachedCollection>,
    config: MemoryCacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    pub fn new(config: MemoryCacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn record_miss(&self) -> CacheResult<Option<Vec<FaqEntry>>> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("faq_cache_misses_total").increment(1);
        Ok(None)
    }
}

#[async_trait]
impl FaqCache for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<FaqEntry>>> {
        let decoded = match self.entries.get(key) {
            Some(cached) if cached.is_expired(self.config.ttl) => None,
            Some(cached) => Some(serde_json::from_str::<Vec<FaqEntry>>(&cached.payload)),
            None => return self.record_miss(),
        };

        match decoded {
            Some(Ok(entries)) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                metrics::counter!("faq_cache_hits_total").increment(1);
                Ok(Some(entries))
            }
            Some(Err(e)) => {
                tracing::warn!(key, "缓存数据损坏，已删除: {}", e);
                self.entries.remove(key);
                self.record_miss()
            }
            None => {
                tracing::debug!(key, "缓存已过期");
                self.entries.remove(key);
                self.record_miss()
            }
        }
    }

    async fn set(&self, key: &str, entries: &[FaqEntry]) -> CacheResult<()> {
        let payload = serde_json::to_string(entries)?;
        self.entries.insert(
            key.to_string(),
            CachedCollection {
                payload,
                stored_at: Instant::now(),
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn clear(&self) -> CacheResult<usize> {
        let count = self.entries.len();
        self.entries.clear();
        Ok(count)
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            total_keys: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
