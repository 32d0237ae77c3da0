//! Web 路由处理器

pub mod cache;
pub mod faq;

pub use cache::*;
pub use faq::*;

use axum::{http::StatusCode, response::Json};

use crate::error::FaqError;

/// 处理器错误响应
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message.into() })),
    )
}

pub(crate) fn internal_error(message: &str, details: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": message,
            "details": details.to_string()
        })),
    )
}

/// 业务错误到 HTTP 响应的映射
impl From<FaqError> for (StatusCode, Json<serde_json::Value>) {
    fn from(error: FaqError) -> Self {
        match error {
            FaqError::Validation(e) => bad_request(e.to_string()),
            FaqError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": error.to_string() })),
            ),
            FaqError::Store(e) => internal_error("Internal server error", e),
        }
    }
}
