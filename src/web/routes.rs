//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // 列表与创建，兼容带或不带结尾斜杠
        .route("/api/faqs/", get(list_faqs).post(create_faq))
        .route("/api/faqs", get(list_faqs).post(create_faq))
        .route("/api/faqs/:id", get(get_faq).put(update_faq))
        // 缓存管理
        .route("/api/cache/stats", get(get_cache_stats))
        .route("/api/cache/clear", post(clear_cache))
}
