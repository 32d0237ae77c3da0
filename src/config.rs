//! 应用配置
//!
//! 配置分层加载：内置默认值 → 可选的 TOML 文件 → `FAQ_*` 环境变量 → 命令行参数。

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::env::{self, EnvError, EnvVar};
use crate::translation::deeplx::{DeepLxConfig, DEFAULT_API_URL};

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件错误: {0}")]
    File(#[from] ::config::ConfigError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("配置无效 ({field}): {message}")]
    Invalid { field: &'static str, message: String },

    #[error("配置序列化失败: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

const MAX_CACHE_TTL_SECS: u64 = 86400 * 7;

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.into(),
    }
}

/// Web 服务器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl WebConfig {
    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// 翻译配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub enabled: bool,
    pub api_url: String,
    pub source_lang: String,
    pub timeout_secs: u64,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_API_URL.to_string(),
            source_lang: "auto".to_string(),
            timeout_secs: 30,
        }
    }
}

impl TranslationSettings {
    pub fn deeplx_config(&self) -> DeepLxConfig {
        DeepLxConfig {
            api_url: self.api_url.clone(),
            source_lang: self.source_lang.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// 缓存配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// 0 表示永不过期
    pub ttl_secs: u64,
}

impl CacheSettings {
    pub fn ttl(&self) -> Option<Duration> {
        (self.ttl_secs > 0).then(|| Duration::from_secs(self.ttl_secs))
    }
}

/// 存储后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Mongodb,
}

impl std::str::FromStr for StoreBackend {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match env::store::Backend::parse(s)?.as_str() {
            "mongodb" => Ok(StoreBackend::Mongodb),
            _ => Ok(StoreBackend::Memory),
        }
    }
}

/// MongoDB 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    /// MongoDB 连接字符串
    pub connection_string: String,
    /// 数据库名称
    pub database_name: String,
    /// 集合名称
    pub collection_name: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            connection_string: "mongodb://localhost:27017".to_string(),
            database_name: "faq".to_string(),
            collection_name: "faqs".to_string(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    pub mongodb: MongoConfig,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub web: WebConfig,
    pub translation: TranslationSettings,
    pub cache: CacheSettings,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            web: WebConfig::default(),
            translation: TranslationSettings::default(),
            cache: CacheSettings::default(),
            store: StoreSettings::default(),
        }
    }
}

impl AppConfig {
    /// 加载配置：默认值、配置文件（若提供）、环境变量覆盖，最后校验
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件读取，缺失的字段使用默认值
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).format(::config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// 应用环境变量覆盖，只覆盖已设置的变量
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        use crate::env::{cache, core, mongodb, store, translation, web};

        if let Some(level) = core::LogLevel::get_if_set()? {
            self.log_level = level;
        }

        if let Some(bind_addr) = web::BindAddress::get_if_set()? {
            self.web.bind_addr = bind_addr;
        }
        if let Some(port) = web::Port::get_if_set()? {
            self.web.port = port;
        }

        if let Some(enabled) = translation::Enabled::get_if_set()? {
            self.translation.enabled = enabled;
        }
        if let Some(api_url) = translation::ApiUrl::get_if_set()? {
            self.translation.api_url = api_url;
        }
        if let Some(timeout) = translation::Timeout::get_if_set()? {
            self.translation.timeout_secs = timeout.as_secs();
        }

        if let Some(ttl) = cache::Ttl::get_if_set()? {
            self.cache.ttl_secs = ttl;
        }

        if let Some(backend) = store::Backend::get_if_set()? {
            self.store.backend = backend.parse()?;
        }
        if let Some(url) = mongodb::ConnectionString::get_if_set()? {
            self.store.mongodb.connection_string = url;
        }
        if let Some(name) = mongodb::DatabaseName::get_if_set()? {
            self.store.mongodb.database_name = name;
        }
        if let Some(name) = mongodb::CollectionName::get_if_set()? {
            self.store.mongodb.collection_name = name;
        }

        Ok(())
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        env::core::LogLevel::parse(&self.log_level)?;

        if self.web.bind_addr.trim().is_empty() {
            return Err(invalid("web.bind_addr", "Bind address cannot be empty"));
        }
        if self.web.port == 0 {
            return Err(invalid("web.port", "Port cannot be 0"));
        }

        if self.translation.enabled {
            let parsed = url::Url::parse(&self.translation.api_url)
                .map_err(|e| invalid("translation.api_url", e.to_string()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(invalid(
                    "translation.api_url",
                    "API URL must use http or https",
                ));
            }
        }
        if !(1..=300).contains(&self.translation.timeout_secs) {
            return Err(invalid(
                "translation.timeout_secs",
                "Timeout must be between 1 and 300 seconds",
            ));
        }

        if self.cache.ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(invalid(
                "cache.ttl_secs",
                format!("TTL cannot exceed {} seconds", MAX_CACHE_TTL_SECS),
            ));
        }

        if self.store.backend == StoreBackend::Mongodb {
            let mongo = &self.store.mongodb;
            if !(mongo.connection_string.starts_with("mongodb://")
                || mongo.connection_string.starts_with("mongodb+srv://"))
            {
                return Err(invalid(
                    "store.mongodb.connection_string",
                    "MongoDB URL must start with mongodb:// or mongodb+srv://",
                ));
            }
            if mongo.database_name.is_empty() || mongo.collection_name.is_empty() {
                return Err(invalid(
                    "store.mongodb",
                    "Database and collection names cannot be empty",
                ));
            }
        }

        Ok(())
    }

    /// 输出当前生效的配置
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
