//! 条目存储
//!
//! - `memory` - 进程内存储（默认）
//! - `mongo` - MongoDB 存储（`mongo` feature）

pub mod memory;
#[cfg(feature = "mongo")]
pub mod mongo;

pub use memory::MemoryStore;
#[cfg(feature = "mongo")]
pub use mongo::MongoStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{FaqDraft, FaqEntry};

/// 持久化 FAQ 条目的存储
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// 插入新条目并分配 id
    async fn insert(&self, draft: FaqDraft) -> StoreResult<FaqEntry>;

    /// 覆盖已有条目，id 不存在时返回 `None`
    async fn update(&self, id: i64, draft: FaqDraft) -> StoreResult<Option<FaqEntry>>;

    async fn get(&self, id: i64) -> StoreResult<Option<FaqEntry>>;

    /// 按语言代码精确匹配，按 id 升序返回
    async fn filter_by_language(&self, language: &str) -> StoreResult<Vec<FaqEntry>>;

    async fn count(&self) -> StoreResult<usize>;
}
