//! 缓存相关API处理器

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Json};

use super::{bad_request, internal_error, ApiError};
use crate::web::types::{AppState, CacheClearRequest, CacheStatsResponse};

/// 获取缓存统计信息
pub async fn get_cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStatsResponse> {
    let stats = state.service.cache_stats();
    Json(CacheStatsResponse {
        enabled: true,
        total_keys: stats.total_keys,
        hits: stats.hits,
        misses: stats.misses,
    })
}

/// 清理缓存
///
/// 请求体中带 `language` 时只清理该分区；请求体为空或没有 `language` 时清理全部。
/// 无法解析的请求体返回 400，不做任何清理。
pub async fn clear_cache(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        CacheClearRequest::default()
    } else {
        serde_json::from_slice::<CacheClearRequest>(&body)
            .map_err(|e| bad_request(format!("Invalid clear request: {}", e)))?
    };

    match state.service.clear_cache(request.language.as_deref()).await {
        Ok(deleted_count) => {
            tracing::info!(deleted_count, "缓存已清理");
            Ok(Json(serde_json::json!({
                "success": true,
                "message": format!("成功清理 {} 个缓存条目", deleted_count),
                "deleted_count": deleted_count
            })))
        }
        Err(e) => Err(internal_error("清理缓存失败", e)),
    }
}
