//! 写入流程集成测试
//!
//! 覆盖翻译成功、翻译失败回退、不支持的语言以及保存后的缓存刷新

mod common;

use faq_server::cache::FaqCache;
use faq_server::error::FaqError;
use faq_server::language::{Language, TranslatedLanguage};
use faq_server::service::{FaqPayload, SaveRequest};
use faq_server::storage::FaqStore;

use common::{translated, MockTranslator, Reply, TestEnvironment, ANSWER, QUESTION};

fn payload(language: Option<&str>) -> FaqPayload {
    FaqPayload {
        question: QUESTION.to_string(),
        answer: ANSWER.to_string(),
        language: language.map(str::to_string),
    }
}

#[tokio::test]
async fn test_fallback_language_skips_translation() {
    let env = TestEnvironment::with_succeeding_translator();

    let entry = env
        .service
        .writer()
        .create(SaveRequest::new(QUESTION, ANSWER, "en"))
        .await
        .expect("create should succeed");

    assert_eq!(entry.language, Language::En);
    assert_eq!(entry.question, QUESTION);
    assert_eq!(entry.answer, ANSWER);
    assert!(entry.question_hi.is_none());
    assert!(entry.question_bn.is_none());
    assert_eq!(env.translator.calls(), 0);
}

#[tokio::test]
async fn test_hindi_translation_fills_only_hindi_field() {
    let env = TestEnvironment::with_succeeding_translator();

    let id = env.service.create(payload(Some("hi"))).await.unwrap();
    let entry = env.store.get(id).await.unwrap().unwrap();

    assert_eq!(entry.language, Language::Hi);
    assert_eq!(
        entry.question_hi.as_deref(),
        Some(translated(QUESTION, TranslatedLanguage::Hi).as_str())
    );
    assert!(entry.question_bn.is_none());
    assert_eq!(entry.question, QUESTION);
    assert_eq!(env.translator.calls(), 1);
}

#[tokio::test]
async fn test_bengali_translation_fills_only_bengali_field() {
    let env = TestEnvironment::with_succeeding_translator();

    let id = env.service.create(payload(Some("bn"))).await.unwrap();
    let entry = env.store.get(id).await.unwrap().unwrap();

    assert_eq!(entry.language, Language::Bn);
    assert!(entry.question_hi.is_none());
    assert_eq!(
        entry.question_bn.as_deref(),
        Some(translated(QUESTION, TranslatedLanguage::Bn).as_str())
    );
}

#[tokio::test]
async fn test_translation_failure_falls_back_to_english() {
    let env = TestEnvironment::with_failing_translator();

    let id = env
        .service
        .create(payload(Some("hi")))
        .await
        .expect("save must not fail when translation fails");
    let entry = env.store.get(id).await.unwrap().unwrap();

    assert_eq!(entry.language, Language::En);
    assert!(entry.question_hi.is_none());
    assert!(entry.question_bn.is_none());
    assert_eq!(env.translator.calls(), 1);
}

#[tokio::test]
async fn test_blank_translation_falls_back_to_english() {
    let env = TestEnvironment::new(MockTranslator::new(Reply::Blank));

    let entry = env
        .service
        .writer()
        .create(SaveRequest::new(QUESTION, ANSWER, "hi"))
        .await
        .unwrap();

    assert_eq!(entry.language, Language::En);
    assert!(entry.question_hi.is_none());
    assert!(entry.question_bn.is_none());
    assert_eq!(env.translator.calls(), 1);
    assert_eq!(env.cache.get("en").await.unwrap().unwrap().len(), 1);
    assert!(env.cache.get("hi").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unsupported_languages_fall_back_without_translation() {
    let env = TestEnvironment::with_succeeding_translator();

    for code in ["fr", "es", "invalid", "HI"] {
        let entry = env
            .service
            .writer()
            .create(SaveRequest::new(QUESTION, ANSWER, code))
            .await
            .unwrap();
        assert_eq!(entry.language, Language::En, "language {code} should fall back");
        assert!(entry.question_hi.is_none());
        assert!(entry.question_bn.is_none());
    }

    assert_eq!(env.translator.calls(), 0);
}

#[tokio::test]
async fn test_service_rejects_unsupported_language() {
    let env = TestEnvironment::with_succeeding_translator();

    let err = env.service.create(payload(Some("fr"))).await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("en, hi, bn"));
    assert_eq!(env.store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_language_defaults_to_english() {
    let env = TestEnvironment::with_succeeding_translator();

    let id = env.service.create(payload(None)).await.unwrap();
    let entry = env.store.get(id).await.unwrap().unwrap();

    assert_eq!(entry.language, Language::En);
    assert_eq!(env.translator.calls(), 0);
}

#[tokio::test]
async fn test_validation_rejects_before_persisting() {
    let env = TestEnvironment::with_succeeding_translator();

    let missing_question = FaqPayload {
        question: String::new(),
        answer: ANSWER.to_string(),
        language: None,
    };
    let err = env.service.create(missing_question).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Question is required");

    let missing_answer = FaqPayload {
        question: QUESTION.to_string(),
        answer: String::new(),
        language: None,
    };
    let err = env.service.create(missing_answer).await.unwrap_err();
    assert_eq!(err.to_string(), "Answer is required");

    assert_eq!(env.store.count().await.unwrap(), 0);
    assert_eq!(env.translator.calls(), 0);
}

#[tokio::test]
async fn test_save_overwrites_language_partition() {
    let env = TestEnvironment::with_succeeding_translator();

    env.service.create(payload(Some("en"))).await.unwrap();
    let cached = env.cache.get("en").await.unwrap().expect("partition populated");
    assert_eq!(cached.len(), 1);

    env.service.create(payload(Some("en"))).await.unwrap();
    let cached = env.cache.get("en").await.unwrap().expect("partition populated");
    assert_eq!(cached.len(), 2);
    assert_eq!(cached[0].id, 1);
    assert_eq!(cached[1].id, 2);

    assert!(env.cache.get("hi").await.unwrap().is_none());
}

#[tokio::test]
async fn test_fallback_save_refreshes_fallback_partition() {
    let env = TestEnvironment::with_failing_translator();

    env.service.create(payload(Some("bn"))).await.unwrap();

    let cached = env.cache.get("en").await.unwrap().expect("en partition populated");
    assert_eq!(cached.len(), 1);
    assert!(env.cache.get("bn").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_moves_entry_between_partitions() {
    let env = TestEnvironment::with_succeeding_translator();

    let id = env.service.create(payload(Some("hi"))).await.unwrap();
    assert_eq!(env.cache.get("hi").await.unwrap().unwrap().len(), 1);

    let updated = env.service.update(id, payload(Some("bn"))).await.unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.language, Language::Bn);
    assert!(updated.question_hi.is_none());
    assert!(updated.question_bn.is_some());

    assert!(env.cache.get("hi").await.unwrap().unwrap().is_empty());
    assert_eq!(env.cache.get("bn").await.unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let env = TestEnvironment::with_succeeding_translator();

    let err = env.service.update(42, payload(Some("hi"))).await.unwrap_err();
    assert!(matches!(err, FaqError::NotFound(42)));
    assert_eq!(env.translator.calls(), 0);
}
