//! 统一错误处理
//!
//! 校验错误、存储错误、缓存错误以及聚合后的业务错误。翻译错误见
//! [`crate::translation::error`]，它们在写入流程内被回退逻辑吸收，不会出现在这里。

use thiserror::Error;

use crate::language::Language;

/// 输入校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Question is required")]
    MissingQuestion,

    #[error("Answer is required")]
    MissingAnswer,

    #[error(
        "Unsupported language '{0}'. Supported languages: {codes}",
        codes = Language::supported_codes()
    )]
    UnsupportedLanguage(String),
}

/// 条目存储错误
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// 连接或查询失败
    #[error("存储后端错误: {0}")]
    Backend(String),

    /// 文档序列化/反序列化失败
    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 缓存错误
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    #[error("缓存序列化错误: {0}")]
    Serialization(String),

    #[error("缓存后端错误: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(error: serde_json::Error) -> Self {
        CacheError::Serialization(error.to_string())
    }
}

/// 业务层错误
#[derive(Error, Debug)]
pub enum FaqError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("FAQ {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FaqError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FaqError::Validation(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type CacheResult<T> = Result<T, CacheError>;
pub type FaqResult<T> = Result<T, FaqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_lists_accepted_set() {
        let message = ValidationError::UnsupportedLanguage("fr".to_string()).to_string();
        assert!(message.contains("'fr'"));
        assert!(message.contains("en, hi, bn"));
    }

    #[test]
    fn test_validation_conversion() {
        let error: FaqError = ValidationError::MissingAnswer.into();
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "Answer is required");
        assert!(!FaqError::NotFound(3).is_validation());
    }
}
