//! # FAQ 服务层
//!
//! - `write` - 写入流程（翻译、回退、缓存刷新）
//! - `read` - 读路径（缓存优先）
//! - `validation` - 请求校验
//!
//! 存储、缓存和翻译在启动时构造一次，由 [`FaqService`] 同时交给读写两条路径。

pub mod read;
pub mod validation;
pub mod write;

pub use read::ReadPath;
pub use validation::FaqPayload;
pub use write::{SaveRequest, WritePipeline};

use std::sync::Arc;

use crate::cache::{CacheStats, FaqCache};
use crate::error::{CacheResult, FaqResult};
use crate::model::FaqEntry;
use crate::storage::FaqStore;
use crate::translation::Translator;

/// FAQ 服务
#[derive(Clone)]
pub struct FaqService {
    writer: WritePipeline,
    reader: ReadPath,
    cache: Arc<dyn FaqCache>,
}

impl FaqService {
    pub fn new(
        store: Arc<dyn FaqStore>,
        cache: Arc<dyn FaqCache>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            writer: WritePipeline::new(Arc::clone(&store), Arc::clone(&cache), translator),
            reader: ReadPath::new(store, Arc::clone(&cache)),
            cache,
        }
    }

    /// 校验并创建条目，返回新 id
    pub async fn create(&self, payload: FaqPayload) -> FaqResult<i64> {
        let request = payload.validate()?;
        let entry = self.writer.create(request).await?;
        Ok(entry.id)
    }

    /// 校验并重新保存条目
    pub async fn update(&self, id: i64, payload: FaqPayload) -> FaqResult<FaqEntry> {
        let request = payload.validate()?;
        self.writer.update(id, request).await
    }

    pub async fn list(&self, language: &str) -> FaqResult<Vec<FaqEntry>> {
        self.reader.list(language).await
    }

    pub async fn get(&self, id: i64) -> FaqResult<Option<FaqEntry>> {
        self.reader.get(id).await
    }

    pub fn writer(&self) -> &WritePipeline {
        &self.writer
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// 清除一个语言分区，或在未指定时清除全部
    pub async fn clear_cache(&self, language: Option<&str>) -> CacheResult<usize> {
        match language {
            Some(language) => Ok(usize::from(self.cache.remove(language).await?)),
            None => self.cache.clear().await,
        }
    }
}
