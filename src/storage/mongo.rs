//! MongoDB 条目存储
//!
//! 文档以数值 `_id` 存储，id 由 `counters` 集合中的计数文档分配。

use async_trait::async_trait;
use bson::{doc, Document};
use futures::stream::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use super::FaqStore;
use crate::config::MongoConfig;
use crate::error::{StoreError, StoreResult};
use crate::language::Language;
use crate::model::{FaqDraft, FaqEntry};

const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB 中存储的 FAQ 文档
#[derive(Debug, Serialize, Deserialize, Clone)]
struct FaqDocument {
    #[serde(rename = "_id")]
    id: i64,
    question: String,
    answer: String,
    language: String,
    question_hi: Option<String>,
    question_bn: Option<String>,
}

impl FaqDocument {
    fn from_draft(id: i64, draft: FaqDraft) -> Self {
        let entry = draft.into_entry(id);
        Self {
            id: entry.id,
            question: entry.question,
            answer: entry.answer,
            language: entry.language.code().to_string(),
            question_hi: entry.question_hi,
            question_bn: entry.question_bn,
        }
    }

    fn into_entry(self) -> StoreResult<FaqEntry> {
        let language = Language::from_code(&self.language).ok_or_else(|| {
            StoreError::Serialization(format!(
                "文档 {} 的语言代码无效: {}",
                self.id, self.language
            ))
        })?;

        Ok(FaqEntry {
            id: self.id,
            question: self.question,
            answer: self.answer,
            language,
            question_hi: self.question_hi,
            question_bn: self.question_bn,
        })
    }
}

fn backend_error(action: &str, error: mongodb::error::Error) -> StoreError {
    StoreError::Backend(format!("{}失败: {}", action, error))
}

/// MongoDB 存储
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
    collection: Collection<FaqDocument>,
    collection_name: String,
}

impl MongoStore {
    /// 连接数据库并创建存储
    pub async fn connect(config: &MongoConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.connection_string)
            .await
            .map_err(|e| backend_error("连接 MongoDB ", e))?;
        let db = client.database(&config.database_name);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| backend_error("MongoDB ping ", e))?;

        tracing::info!(
            database = %config.database_name,
            collection = %config.collection_name,
            "MongoDB 连接成功"
        );

        Ok(Self::with_database(db, &config.collection_name))
    }

    pub fn with_database(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<FaqDocument>(collection_name);
        Self {
            db,
            collection,
            collection_name: collection_name.to_string(),
        }
    }

    /// 原子地分配下一个 id
    async fn next_id(&self) -> StoreResult<i64> {
        let counters = self.db.collection::<Document>(COUNTERS_COLLECTION);
        let counter = counters
            .find_one_and_update(
                doc! { "_id": self.collection_name.as_str() },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| backend_error("分配 id ", e))?
            .ok_or_else(|| StoreError::Backend("计数文档缺失".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| StoreError::Serialization(format!("计数文档格式错误: {}", e)))
    }
}

#[async_trait]
impl FaqStore for MongoStore {
    async fn insert(&self, draft: FaqDraft) -> StoreResult<FaqEntry> {
        let id = self.next_id().await?;
        let document = FaqDocument::from_draft(id, draft);

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| backend_error("插入文档", e))?;

        document.into_entry()
    }

    async fn update(&self, id: i64, draft: FaqDraft) -> StoreResult<Option<FaqEntry>> {
        let document = FaqDocument::from_draft(id, draft);
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &document)
            .await
            .map_err(|e| backend_error("更新文档", e))?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        document.into_entry().map(Some)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<FaqEntry>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| backend_error("查询文档", e))?
            .map(FaqDocument::into_entry)
            .transpose()
    }

    async fn filter_by_language(&self, language: &str) -> StoreResult<Vec<FaqEntry>> {
        let cursor = self
            .collection
            .find(doc! { "language": language })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| backend_error("查询数据库", e))?;

        let documents: Vec<FaqDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| backend_error("读取结果", e))?;

        documents.into_iter().map(FaqDocument::into_entry).collect()
    }

    async fn count(&self) -> StoreResult<usize> {
        let count = self
            .collection
            .count_documents(doc! {})
            .await
            .map_err(|e| backend_error("统计文档", e))?;
        Ok(count as usize)
    }
}
