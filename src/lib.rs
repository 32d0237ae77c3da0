//! # FAQ Server
//!
//! 提供常见问题（FAQ）的 HTTP API：保存时自动翻译问题，读取时按语言缓存。
//!
//! ## 模块组织
//!
//! - `language` - 支持的语言集合
//! - `model` - FAQ 数据模型
//! - `storage` - 条目存储（内存、MongoDB）
//! - `cache` - 按语言分区的读缓存
//! - `translation` - 翻译能力
//! - `service` - 写入流程、读路径、请求校验
//! - `web` - Web 服务器
//! - `config` / `env` / `logging` - 配置、环境变量、日志

pub mod cache;
pub mod config;
pub mod env;
pub mod error;
pub mod language;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod translation;
pub mod web;

pub use error::{FaqError, FaqResult, ValidationError};
pub use language::Language;
pub use model::FaqEntry;
pub use service::FaqService;
