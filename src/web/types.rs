//! Web 模块的数据类型定义

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::model::FaqEntry;
use crate::service::FaqService;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub service: FaqService,
}

/// 列表/详情查询参数
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn language(&self) -> &str {
        self.lang.as_deref().unwrap_or(Language::FALLBACK.code())
    }
}

/// 创建/更新成功响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub message: String,
    pub id: i64,
}

/// 单个条目响应
#[derive(Debug, Serialize)]
pub struct FaqDetailResponse {
    #[serde(flatten)]
    pub entry: FaqEntry,
    pub translated_question: String,
}

/// 缓存统计响应
#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub enabled: bool,
    pub total_keys: usize,
    pub hits: u64,
    pub misses: u64,
}

/// 缓存清理请求
#[derive(Debug, Default, Deserialize)]
pub struct CacheClearRequest {
    pub language: Option<String>,
}
