//! FAQ 数据模型

use serde::{Deserialize, Serialize};

use crate::language::{Language, TranslatedLanguage};

/// 已持久化的 FAQ 条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i64,
    /// 原始语言的问题
    pub question: String,
    /// 富文本答案（HTML）
    pub answer: String,
    pub language: Language,
    pub question_hi: Option<String>,
    pub question_bn: Option<String>,
}

/// 待写入的条目内容（无 id）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub language: Language,
    pub translations: TranslatedQuestions,
}

/// 各语言的翻译问题字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedQuestions {
    pub hi: Option<String>,
    pub bn: Option<String>,
}

impl TranslatedQuestions {
    pub fn get(&self, lang: TranslatedLanguage) -> Option<&str> {
        match lang {
            TranslatedLanguage::Hi => self.hi.as_deref(),
            TranslatedLanguage::Bn => self.bn.as_deref(),
        }
    }

    /// 只保留一种语言的翻译，其余字段清空
    pub fn only(lang: TranslatedLanguage, text: String) -> Self {
        let mut translations = Self::default();
        match lang {
            TranslatedLanguage::Hi => translations.hi = Some(text),
            TranslatedLanguage::Bn => translations.bn = Some(text),
        }
        translations
    }

    pub fn is_empty(&self) -> bool {
        self.hi.is_none() && self.bn.is_none()
    }
}

impl FaqDraft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            ..Default::default()
        }
    }

    /// 绑定存储分配的 id
    pub fn into_entry(self, id: i64) -> FaqEntry {
        FaqEntry {
            id,
            question: self.question,
            answer: self.answer,
            language: self.language,
            question_hi: self.translations.hi,
            question_bn: self.translations.bn,
        }
    }
}

impl FaqEntry {
    /// 返回指定语言的翻译问题，没有翻译时返回原始问题
    pub fn translated_question(&self, lang: &str) -> &str {
        let slot = Language::from_code(lang).and_then(Language::translated_slot);
        let translated = match slot {
            Some(TranslatedLanguage::Hi) => self.question_hi.as_deref(),
            Some(TranslatedLanguage::Bn) => self.question_bn.as_deref(),
            None => None,
        };

        match translated {
            Some(text) if !text.is_empty() => text,
            _ => &self.question,
        }
    }
}
