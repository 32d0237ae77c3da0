//! FAQ API 处理器

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};

use super::{bad_request, ApiError};
use crate::model::FaqEntry;
use crate::service::FaqPayload;
use crate::web::types::{AppState, FaqDetailResponse, LangQuery, SaveResponse};

/// 按语言列出 FAQ
pub async fn list_faqs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> Result<Json<Vec<FaqEntry>>, ApiError> {
    let entries = state.service.list(query.language()).await?;
    Ok(Json(entries))
}

/// 创建 FAQ
pub async fn create_faq(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FaqPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;

    let id = state.service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            message: "FAQ created successfully".to_string(),
            id,
        }),
    ))
}

/// 重新保存已有 FAQ
pub async fn update_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<FaqPayload>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;

    let entry = state.service.update(id, payload).await?;
    Ok(Json(SaveResponse {
        message: "FAQ updated successfully".to_string(),
        id: entry.id,
    }))
}

/// 获取单个 FAQ 及指定语言的问题
pub async fn get_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<LangQuery>,
) -> Result<Json<FaqDetailResponse>, ApiError> {
    let entry = state
        .service
        .get(id)
        .await?
        .ok_or(crate::error::FaqError::NotFound(id))?;

    let translated_question = entry.translated_question(query.language()).to_string();
    Ok(Json(FaqDetailResponse {
        entry,
        translated_question,
    }))
}
