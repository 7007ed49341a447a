use crate::listing::model::lenient_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 상품 문의 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub query_id: i64,
    pub query: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Query {
    pub fn author_or_anonymous(&self) -> &str {
        self.customer_name.as_deref().unwrap_or("Anonymous")
    }

    pub fn is_answered(&self) -> bool {
        self.reply.as_deref().is_some_and(|r| !r.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PostQueryCommand<'a> {
    pub product_id: i64,
    pub query: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EditQueryCommand<'a> {
    pub query: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RespondCommand<'a> {
    pub reply: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryEnvelope {
    pub query: Query,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueriesEnvelope {
    #[serde(default)]
    pub queries: Vec<Query>,
}

// 답변 응답은 reply 필드만 보장된다
#[derive(Debug, Deserialize)]
pub(crate) struct RepliedQuery {
    #[serde(default)]
    pub reply: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RespondEnvelope {
    pub query: RepliedQuery,
}
