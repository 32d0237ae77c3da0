//! 写入流程
//!
//! 每次创建或更新条目时：确定目标语言，调用翻译，写入对应翻译字段，
//! 失败时整体回退到默认语言，持久化后覆盖该语言的缓存分区。

use std::sync::Arc;

use crate::cache::FaqCache;
use crate::error::{FaqError, FaqResult};
use crate::language::Language;
use crate::model::{FaqDraft, FaqEntry, TranslatedQuestions};
use crate::storage::FaqStore;
use crate::translation::error::log_fallback;
use crate::translation::{TranslationError, Translator};

/// 调用方提交的条目内容，语言为原始字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub question: String,
    pub answer: String,
    pub language: String,
}

impl SaveRequest {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            language: language.into(),
        }
    }
}

/// 写入流程
#[derive(Clone)]
pub struct WritePipeline {
    store: Arc<dyn FaqStore>,
    cache: Arc<dyn FaqCache>,
    translator: Arc<dyn Translator>,
}

impl WritePipeline {
    pub fn new(
        store: Arc<dyn FaqStore>,
        cache: Arc<dyn FaqCache>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            store,
            cache,
            translator,
        }
    }

    /// 根据请求的语言生成待持久化的内容
    ///
    /// 不支持的语言直接回退且不调用翻译；翻译失败或译文为空时同样回退，翻译字段全部为空。
    pub async fn prepare(&self, request: SaveRequest) -> FaqDraft {
        let mut draft = FaqDraft::new(request.question, request.answer);

        let Some(language) = Language::from_code(&request.language) else {
            tracing::info!(
                requested = %request.language,
                "不支持的语言，回退到 {}",
                Language::FALLBACK
            );
            return draft;
        };

        let Some(slot) = language.translated_slot() else {
            return draft;
        };

        let translated = self
            .translator
            .translate(&draft.question, slot)
            .await
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(TranslationError::ParseError("翻译结果为空".to_string()))
                } else {
                    Ok(text)
                }
            });

        match translated {
            Ok(text) => {
                draft.language = language;
                draft.translations = TranslatedQuestions::only(slot, text);
            }
            Err(e) => {
                metrics::counter!("faq_translation_failures_total").increment(1);
                log_fallback(&e, language.code());
            }
        }

        draft
    }

    /// 创建新条目
    pub async fn create(&self, request: SaveRequest) -> FaqResult<FaqEntry> {
        let draft = self.prepare(request).await;
        let entry = self.store.insert(draft).await.map_err(|e| {
            tracing::error!("保存 FAQ 失败: {}", e);
            FaqError::from(e)
        })?;

        tracing::info!(id = entry.id, language = %entry.language, "FAQ 已创建");
        metrics::counter!("faq_entries_saved_total").increment(1);

        self.refresh_cache(entry.language.code()).await;
        Ok(entry)
    }

    /// 重新保存已有条目，再次执行翻译
    pub async fn update(&self, id: i64, request: SaveRequest) -> FaqResult<FaqEntry> {
        let previous = self.store.get(id).await?.ok_or(FaqError::NotFound(id))?;

        let draft = self.prepare(request).await;
        let entry = self
            .store
            .update(id, draft)
            .await
            .map_err(|e| {
                tracing::error!(id, "更新 FAQ 失败: {}", e);
                FaqError::from(e)
            })?
            .ok_or(FaqError::NotFound(id))?;

        tracing::info!(id, language = %entry.language, "FAQ 已更新");
        metrics::counter!("faq_entries_saved_total").increment(1);

        self.refresh_cache(entry.language.code()).await;
        if previous.language != entry.language {
            self.refresh_cache(previous.language.code()).await;
        }
        Ok(entry)
    }

    /// 重新查询该语言的全部条目并覆盖缓存
    ///
    /// 存储是数据源，刷新失败只记录警告，不影响写入结果。
    pub async fn refresh_cache(&self, language: &str) {
        let entries = match self.store.filter_by_language(language).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(language, "刷新缓存时查询失败: {}", e);
                return;
            }
        };

        if let Err(e) = self.cache.set(language, &entries).await {
            tracing::warn!(language, "缓存存储失败: {}", e);
        } else {
            tracing::debug!(language, count = entries.len(), "缓存分区已刷新");
        }
    }
}
