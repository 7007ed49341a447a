// region:    --- Imports
use crate::context::AppContext;
use crate::error::Result;
use crate::feedback::{record, FormStatus};
use std::collections::HashMap;

// endregion: --- Imports

// region:    --- Modules
pub mod commands;
pub mod model;

pub use model::Query;

// endregion: --- Modules

// region:    --- Query Panel
/// 상품 상세 화면의 문의 영역
/// 요청이 성공하면 로컬 목록만 갱신하고 다시 조회하지 않는다.
pub struct QueryPanel {
    ctx: AppContext,
    product_id: i64,
    queries: Vec<Query>,
    status: FormStatus,
    // 답변 입력 에러는 문의별로 표시
    reply_errors: HashMap<i64, String>,
}

impl QueryPanel {
    pub fn new(ctx: AppContext, product_id: i64) -> Self {
        Self {
            ctx,
            product_id,
            queries: Vec::new(),
            status: FormStatus::Idle,
            reply_errors: HashMap::new(),
        }
    }

    pub fn with_queries(ctx: AppContext, product_id: i64, queries: Vec<Query>) -> Self {
        Self {
            queries,
            ..Self::new(ctx, product_id)
        }
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn reply_error(&self, query_id: i64) -> Option<&str> {
        self.reply_errors.get(&query_id).map(String::as_str)
    }

    pub async fn load(&mut self) -> Result<usize> {
        let result = commands::fetch_queries(&self.ctx, self.product_id).await;
        self.queries = record(&mut self.status, result, |_| None)?;
        Ok(self.queries.len())
    }

    pub async fn post(&mut self, text: &str) -> Result<()> {
        let result = commands::post_query(&self.ctx, self.product_id, text).await;
        let query = record(&mut self.status, result, |_| {
            Some("Query posted.".to_string())
        })?;
        self.queries.push(query);
        Ok(())
    }

    pub async fn edit(&mut self, query_id: i64, text: &str) -> Result<()> {
        let result = commands::edit_query(&self.ctx, query_id, text).await;
        let updated = record(&mut self.status, result, |_| {
            Some("Query updated.".to_string())
        })?;
        match self.queries.iter_mut().find(|q| q.query_id == query_id) {
            Some(q) => *q = updated,
            None => self.queries.push(updated),
        }
        Ok(())
    }

    pub async fn delete(&mut self, query_id: i64) -> Result<()> {
        let result = commands::delete_query(&self.ctx, query_id).await;
        record(&mut self.status, result, |_| {
            Some("Query deleted.".to_string())
        })?;
        self.queries.retain(|q| q.query_id != query_id);
        Ok(())
    }

    /// 판매자 답변. 에러는 해당 문의에만 표시한다.
    pub async fn respond(&mut self, query_id: i64, reply: &str) -> Result<()> {
        match commands::respond_to_query(&self.ctx, query_id, reply).await {
            Ok(reply) => {
                if let Some(q) = self.queries.iter_mut().find(|q| q.query_id == query_id) {
                    q.reply = Some(reply);
                }
                self.reply_errors.remove(&query_id);
                Ok(())
            }
            Err(e) => {
                self.reply_errors.insert(query_id, e.to_string());
                Err(e)
            }
        }
    }
}

// endregion: --- Query Panel
