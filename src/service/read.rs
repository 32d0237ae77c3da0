//! 读路径：按语言列出条目，缓存优先

use std::sync::Arc;

use crate::cache::FaqCache;
use crate::error::FaqResult;
use crate::model::FaqEntry;
use crate::storage::FaqStore;

#[derive(Clone)]
pub struct ReadPath {
    store: Arc<dyn FaqStore>,
    cache: Arc<dyn FaqCache>,
}

impl ReadPath {
    pub fn new(store: Arc<dyn FaqStore>, cache: Arc<dyn FaqCache>) -> Self {
        Self { store, cache }
    }

    /// 列出 `language` 下的所有条目
    ///
    /// 命中时直接返回缓存内容，不访问存储；未命中时查询存储并以同一个键回填。
    /// 缓存错误按未命中处理。
    ///
    /// 任意语言字符串都会成为缓存键，包括不支持的语言（缓存空集合）。
    /// 未配置 TTL 时这些键会一直保留，直到通过 `/api/cache/clear` 清理。
    pub async fn list(&self, language: &str) -> FaqResult<Vec<FaqEntry>> {
        match self.cache.get(language).await {
            Ok(Some(entries)) => {
                tracing::debug!(language, count = entries.len(), "缓存命中");
                return Ok(entries);
            }
            Ok(None) => tracing::debug!(language, "缓存未命中"),
            Err(e) => tracing::warn!(language, "读取缓存失败: {}", e),
        }

        let entries = self.store.filter_by_language(language).await?;

        if let Err(e) = self.cache.set(language, &entries).await {
            tracing::warn!(language, "缓存存储失败: {}", e);
        }

        Ok(entries)
    }

    /// 按 id 读取单个条目，不经过缓存
    pub async fn get(&self, id: i64) -> FaqResult<Option<FaqEntry>> {
        Ok(self.store.get(id).await?)
    }
}
