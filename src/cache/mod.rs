//! 按语言分区的读缓存
//!
//! 缓存键是请求中的语言字符串，值是该语言全部条目序列化后的集合。
//! 读路径在未命中时填充，写入流程在每次保存后整体覆盖对应分区。

pub mod memory;

pub use memory::{MemoryCache, MemoryCacheConfig};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CacheResult;
use crate::model::FaqEntry;

/// 缓存统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub total_keys: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// 语言分区缓存
#[async_trait]
pub trait FaqCache: Send + Sync {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<FaqEntry>>>;

    /// 覆盖 `key` 下的整个集合
    async fn set(&self, key: &str, entries: &[FaqEntry]) -> CacheResult<()>;

    async fn remove(&self, key: &str) -> CacheResult<bool>;

    /// 清空所有分区，返回删除的键数量
    async fn clear(&self) -> CacheResult<usize>;

    fn stats(&self) -> CacheStats;
}
