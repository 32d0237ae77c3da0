//! 创建/更新请求的输入校验

use serde::Deserialize;

use super::write::SaveRequest;
use crate::error::ValidationError;
use crate::language::Language;

/// 创建或更新 FAQ 的请求体
///
/// 缺失的问题和答案按空字符串处理，缺失的语言使用回退语言。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqPayload {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl FaqPayload {
    /// 依次校验问题、答案、语言
    pub fn validate(self) -> Result<SaveRequest, ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::MissingQuestion);
        }

        if self.answer.trim().is_empty() {
            return Err(ValidationError::MissingAnswer);
        }

        let language = self
            .language
            .unwrap_or_else(|| Language::FALLBACK.code().to_string());
        if Language::from_code(&language).is_none() {
            return Err(ValidationError::UnsupportedLanguage(language));
        }

        Ok(SaveRequest::new(self.question, self.answer, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(question: &str, answer: &str, language: Option<&str>) -> FaqPayload {
        FaqPayload {
            question: question.to_string(),
            answer: answer.to_string(),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_payload() {
        let request = payload("Valid question?", "<p>Answer</p>", Some("hi"))
            .validate()
            .unwrap();
        assert_eq!(request.language, "hi");
    }

    #[test]
    fn test_missing_language_defaults_to_fallback() {
        let request = payload("Q?", "<p>A</p>", None).validate().unwrap();
        assert_eq!(request.language, "en");
    }

    #[test]
    fn test_validation_order() {
        // 问题优先于答案和语言
        assert_eq!(
            payload("  ", "", Some("invalid")).validate(),
            Err(ValidationError::MissingQuestion)
        );
        assert_eq!(
            payload("Q?", "\n\t", Some("invalid")).validate(),
            Err(ValidationError::MissingAnswer)
        );
        assert_eq!(
            payload("Q?", "<p>A</p>", Some("invalid")).validate(),
            Err(ValidationError::UnsupportedLanguage("invalid".to_string()))
        );
    }

    #[test]
    fn test_empty_language_is_unsupported() {
        assert!(matches!(
            payload("Q?", "A", Some("")).validate(),
            Err(ValidationError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let payload: FaqPayload = serde_json::from_str(r#"{"answer": "A"}"#).unwrap();
        assert!(payload.question.is_empty());
        assert!(payload.language.is_none());
    }
}
