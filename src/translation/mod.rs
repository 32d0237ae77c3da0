//! 翻译功能模块
//!
//! 写入流程通过 [`Translator`] 调用外部翻译能力。返回值是显式的
//! [`TranslationResult`]，调用方必须处理失败分支。
//!
//! ## 模块组织
//!
//! - `error` - 翻译错误类型
//! - `deeplx` - DeepLX 兼容的 HTTP 翻译客户端

pub mod deeplx;
pub mod error;

pub use deeplx::{DeepLxConfig, DeepLxTranslator};
pub use error::{TranslationError, TranslationResult};

use async_trait::async_trait;

use crate::language::TranslatedLanguage;

/// 外部翻译能力
#[async_trait]
pub trait Translator: Send + Sync {
    /// 将 `text` 翻译为 `target` 语言
    async fn translate(&self, text: &str, target: TranslatedLanguage) -> TranslationResult<String>;
}

/// 翻译被禁用时使用，所有请求都失败并触发回退
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTranslator;

#[async_trait]
impl Translator for DisabledTranslator {
    async fn translate(
        &self,
        _text: &str,
        _target: TranslatedLanguage,
    ) -> TranslationResult<String> {
        Err(TranslationError::ConfigError("翻译功能已禁用".to_string()))
    }
}
