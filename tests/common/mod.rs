// 集成测试公共模块
//
// 提供可计数的翻译器、存储包装和服务构造工具

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use faq_server::cache::{FaqCache, MemoryCache, MemoryCacheConfig};
use faq_server::error::{StoreError, StoreResult};
use faq_server::language::TranslatedLanguage;
use faq_server::model::{FaqDraft, FaqEntry};
use faq_server::service::FaqService;
use faq_server::storage::{FaqStore, MemoryStore};
use faq_server::translation::{TranslationError, TranslationResult, Translator};
use faq_server::web::{create_router, AppState};

/// 翻译器的固定行为
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Translate,
    Fail,
    Blank,
}

/// 可控的翻译器：按固定行为回复，并记录调用次数
pub struct MockTranslator {
    reply: Reply,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn succeeding() -> Arc<Self> {
        Self::new(Reply::Translate)
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Reply::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// 成功时的译文格式
pub fn translated(text: &str, target: TranslatedLanguage) -> String {
    format!("[{}] {}", target.language().code(), text)
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: TranslatedLanguage) -> TranslationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Reply::Translate => Ok(translated(text, target)),
            Reply::Fail => Err(TranslationError::NetworkError("connection refused".to_string())),
            Reply::Blank => Ok("  ".to_string()),
        }
    }
}

/// 统计按语言查询次数的存储包装
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    filter_calls: AtomicUsize,
}

impl CountingStore {
    pub fn filter_calls(&self) -> usize {
        self.filter_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FaqStore for CountingStore {
    async fn insert(&self, draft: FaqDraft) -> StoreResult<FaqEntry> {
        self.inner.insert(draft).await
    }

    async fn update(&self, id: i64, draft: FaqDraft) -> StoreResult<Option<FaqEntry>> {
        self.inner.update(id, draft).await
    }

    async fn get(&self, id: i64) -> StoreResult<Option<FaqEntry>> {
        self.inner.get(id).await
    }

    async fn filter_by_language(&self, language: &str) -> StoreResult<Vec<FaqEntry>> {
        self.filter_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.filter_by_language(language).await
    }

    async fn count(&self) -> StoreResult<usize> {
        self.inner.count().await
    }
}

/// 所有操作都失败的存储
pub struct BrokenStore;

#[async_trait]
impl FaqStore for BrokenStore {
    async fn insert(&self, _draft: FaqDraft) -> StoreResult<FaqEntry> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn update(&self, _id: i64, _draft: FaqDraft) -> StoreResult<Option<FaqEntry>> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn get(&self, _id: i64) -> StoreResult<Option<FaqEntry>> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn filter_by_language(&self, _language: &str) -> StoreResult<Vec<FaqEntry>> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn count(&self) -> StoreResult<usize> {
        Err(StoreError::Backend("connection reset".to_string()))
    }
}

/// 测试环境：服务及其依赖的句柄
pub struct TestEnvironment {
    pub service: FaqService,
    pub store: Arc<CountingStore>,
    pub cache: Arc<MemoryCache>,
    pub translator: Arc<MockTranslator>,
}

impl TestEnvironment {
    pub fn new(translator: Arc<MockTranslator>) -> Self {
        let store = Arc::new(CountingStore::default());
        let cache = Arc::new(MemoryCache::new(MemoryCacheConfig::default()));
        let service = FaqService::new(
            store.clone() as Arc<dyn FaqStore>,
            cache.clone() as Arc<dyn FaqCache>,
            translator.clone() as Arc<dyn Translator>,
        );

        Self {
            service,
            store,
            cache,
            translator,
        }
    }

    pub fn with_succeeding_translator() -> Self {
        Self::new(MockTranslator::succeeding())
    }

    pub fn with_failing_translator() -> Self {
        Self::new(MockTranslator::failing())
    }

    pub fn router(&self) -> Router {
        create_router(Arc::new(AppState {
            service: self.service.clone(),
        }))
    }
}

/// 存储不可用时的路由器
pub fn broken_router() -> Router {
    let service = FaqService::new(
        Arc::new(BrokenStore),
        Arc::new(MemoryCache::new(MemoryCacheConfig::default())),
        MockTranslator::succeeding(),
    );
    create_router(Arc::new(AppState { service }))
}

/// 测试数据
pub const QUESTION: &str = "What is Django?";
pub const ANSWER: &str = "<p>A web framework</p>";
