//! Web 服务器模块
//!
//! 提供 FAQ 的 HTTP API：按语言列出、创建、更新、查看单条，以及缓存管理。

pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cache::{MemoryCache, MemoryCacheConfig};
use crate::config::{AppConfig, StoreBackend, WebConfig};
use crate::error::StoreError;
use crate::service::FaqService;
use crate::storage::{FaqStore, MemoryStore};
use crate::translation::{
    DeepLxTranslator, DisabledTranslator, TranslationError, Translator,
};

/// 服务器启动错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储初始化失败: {0}")]
    Store(#[from] StoreError),

    #[error("翻译客户端初始化失败: {0}")]
    Translation(#[from] TranslationError),

    #[error("存储后端 {0:?} 未编译，请启用对应的 feature")]
    BackendUnavailable(StoreBackend),

    #[error("服务器错误: {0}")]
    Io(#[from] std::io::Error),
}

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    service: FaqService,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, service: FaqService) -> Self {
        Self { config, service }
    }

    /// 根据应用配置构造存储、缓存和翻译客户端
    pub async fn from_config(config: &AppConfig) -> Result<Self, ServerError> {
        let store = build_store(config).await?;

        let cache = Arc::new(MemoryCache::new(MemoryCacheConfig {
            ttl: config.cache.ttl(),
        }));

        let translator: Arc<dyn Translator> = if config.translation.enabled {
            tracing::info!(api_url = %config.translation.api_url, "翻译功能已启用");
            Arc::new(DeepLxTranslator::new(config.translation.deeplx_config())?)
        } else {
            tracing::warn!("翻译功能已禁用，所有条目将保存为默认语言");
            Arc::new(DisabledTranslator)
        };

        let service = FaqService::new(store, cache, translator);
        Ok(Self::new(config.web.clone(), service))
    }

    pub fn router(&self) -> Router {
        create_router(Arc::new(AppState {
            service: self.service.clone(),
        }))
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> Result<(), ServerError> {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(self.config.listen_address()).await?;
        tracing::info!("Web server starting at http://{}", self.config.listen_address());

        axum::serve(listener, app).await?;
        Ok(())
    }
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn FaqStore>, ServerError> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("使用内存存储");
            Ok(Arc::new(MemoryStore::new()))
        }
        #[cfg(feature = "mongo")]
        StoreBackend::Mongodb => {
            let store = crate::storage::MongoStore::connect(&config.store.mongodb).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongo"))]
        backend @ StoreBackend::Mongodb => Err(ServerError::BackendUnavailable(backend)),
    }
}

/// 创建路由器
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_routes()
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
