//! 支持的语言集合
//!
//! 语言集合是封闭的：`en` 为回退语言，`hi` 和 `bn` 各自对应一个翻译字段。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 英语（回退语言）
    #[default]
    En,
    /// 印地语
    Hi,
    /// 孟加拉语
    Bn,
}

/// 拥有独立翻译字段的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslatedLanguage {
    Hi,
    Bn,
}

impl Language {
    /// 回退语言
    pub const FALLBACK: Language = Language::En;

    /// 全部支持的语言，回退语言在前
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Bn];

    /// 语言代码
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
        }
    }

    /// 解析语言代码，不在支持集合内时返回 `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }

    pub fn is_fallback(self) -> bool {
        self == Self::FALLBACK
    }

    /// 该语言对应的翻译字段；回退语言没有翻译字段
    pub fn translated_slot(self) -> Option<TranslatedLanguage> {
        match self {
            Language::En => None,
            Language::Hi => Some(TranslatedLanguage::Hi),
            Language::Bn => Some(TranslatedLanguage::Bn),
        }
    }

    /// 以逗号分隔的支持语言列表，用于错误信息
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TranslatedLanguage {
    pub fn language(self) -> Language {
        match self {
            TranslatedLanguage::Hi => Language::Hi,
            TranslatedLanguage::Bn => Language::Bn,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ValidationError::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code(" hi "), Some(Language::Hi));
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in ["fr", "es", "invalid", "", "EN"] {
            assert!(Language::from_code(code).is_none(), "{code} should be unsupported");
        }
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_only_fallback_has_no_slot() {
        assert!(Language::En.translated_slot().is_none());
        assert_eq!(Language::Hi.translated_slot(), Some(TranslatedLanguage::Hi));
        assert_eq!(Language::Bn.translated_slot(), Some(TranslatedLanguage::Bn));
        assert_eq!(TranslatedLanguage::Bn.language(), Language::Bn);
    }

    #[test]
    fn test_supported_codes_listing() {
        assert_eq!(Language::supported_codes(), "en, hi, bn");
        assert_eq!(Language::default(), Language::FALLBACK);
    }
}
