//! 翻译模块错误处理
//!
//! 翻译失败不会传递给 API 调用方，写入流程会据此回退到默认语言；
//! 这里的类型只用于日志和统计。

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// 配置错误（包括翻译被禁用）
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 网络错误
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 超时错误
    #[error("操作超时: {0}")]
    TimeoutError(String),

    /// 输入验证错误
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 翻译服务返回错误
    #[error("翻译服务错误: {0}")]
    TranslationServiceError(String),

    /// 响应解析错误
    #[error("解析错误: {0}")]
    ParseError(String),
}

impl TranslationError {
    /// 获取错误的严重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TranslationError::ConfigError(_) => ErrorSeverity::Info,
            TranslationError::InvalidInput(_) => ErrorSeverity::Info,
            TranslationError::NetworkError(_) => ErrorSeverity::Warning,
            TranslationError::TimeoutError(_) => ErrorSeverity::Warning,
            TranslationError::TranslationServiceError(_) => ErrorSeverity::Error,
            TranslationError::ParseError(_) => ErrorSeverity::Error,
        }
    }
}

/// 错误严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TranslationError::TimeoutError(error.to_string())
        } else if error.is_decode() {
            TranslationError::ParseError(error.to_string())
        } else {
            TranslationError::NetworkError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        TranslationError::ParseError(format!("JSON解析错误: {}", error))
    }
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;

/// 按严重程度记录翻译错误
pub fn log_fallback(error: &TranslationError, target: &str) {
    match error.severity() {
        ErrorSeverity::Info => {
            tracing::info!(target_lang = target, "翻译跳过，回退到默认语言: {}", error)
        }
        ErrorSeverity::Warning => {
            tracing::warn!(target_lang = target, "翻译失败，回退到默认语言: {}", error)
        }
        ErrorSeverity::Error => {
            tracing::error!(target_lang = target, "翻译服务异常，回退到默认语言: {}", error)
        }
    }
}
