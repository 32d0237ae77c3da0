//! DeepLX 兼容的翻译客户端
//!
//! 请求格式：`POST {"text", "source_lang", "target_lang"}`，
//! 响应格式：`{"code": 200, "data": "..."}`。

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::{TranslationError, TranslationResult};
use super::Translator;
use crate::language::TranslatedLanguage;

/// 默认的 DeepLX 地址
pub const DEFAULT_API_URL: &str = "http://localhost:1188/translate";

/// 客户端配置
#[derive(Debug, Clone)]
pub struct DeepLxConfig {
    pub api_url: String,
    pub source_lang: String,
    pub timeout: Duration,
}

impl Default for DeepLxConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            source_lang: "auto".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Serialize)]
struct DeepLxRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: String,
}

#[derive(Deserialize)]
struct DeepLxResponse {
    code: u16,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// DeepLX 翻译客户端
#[derive(Debug, Clone)]
pub struct DeepLxTranslator {
    client: reqwest::Client,
    config: DeepLxConfig,
}

impl DeepLxTranslator {
    pub fn new(config: DeepLxConfig) -> TranslationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslationError::ConfigError(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DeepLxConfig {
        &self.config
    }
}

#[async_trait]
impl Translator for DeepLxTranslator {
    async fn translate(&self, text: &str, target: TranslatedLanguage) -> TranslationResult<String> {
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidInput("待翻译文本为空".to_string()));
        }

        let request = DeepLxRequest {
            text,
            source_lang: &self.config.source_lang,
            target_lang: target.language().code().to_uppercase(),
        };
        let body = serde_json::to_vec(&request)?;

        let response = self
            .client
            .post(&self.config.api_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;
        if !status.is_success() {
            return Err(TranslationError::TranslationServiceError(format!(
                "HTTP {}: {}",
                status, payload
            )));
        }

        let parsed: DeepLxResponse = serde_json::from_str(&payload)?;
        if parsed.code != 200 {
            return Err(TranslationError::TranslationServiceError(format!(
                "code {}: {}",
                parsed.code,
                parsed.message.unwrap_or_default()
            )));
        }

        match parsed.data {
            Some(data) if !data.trim().is_empty() => Ok(data),
            _ => Err(TranslationError::ParseError("响应中没有译文".to_string())),
        }
    }
}
