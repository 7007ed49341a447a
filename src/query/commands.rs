/// 상품 문의 관련 요청
/// 1. 조회
/// 2. 등록
/// 3. 수정
/// 4. 삭제
/// 5. 판매자 답변
// region:    --- Imports
use super::model::{
    EditQueryCommand, PostQueryCommand, QueriesEnvelope, Query, QueryEnvelope, RespondCommand,
    RespondEnvelope,
};
use crate::api::routes;
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::session::TokenSlot;
use reqwest::{Method, StatusCode};
use tracing::info;

// endregion: --- Imports

const LOGIN_REQUIRED: &str = "Please log in to post a query";

/// 1. 상품 문의 조회. 404는 문의가 없는 것으로 본다.
pub async fn fetch_queries(ctx: &AppContext, product_id: i64) -> Result<Vec<Query>> {
    info!("{:<12} --> 문의 조회 product: {}", "Query", product_id);
    let token = ctx.token(TokenSlot::User).await?;
    let request = ctx.api.request(
        Method::GET,
        &routes::query_product(product_id),
        token.as_deref(),
    );
    match ctx
        .api
        .send_json::<QueriesEnvelope>(request, "Failed to fetch queries")
        .await
    {
        Ok(envelope) => Ok(envelope.queries),
        Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// 2. 문의 등록
pub async fn post_query(ctx: &AppContext, product_id: i64, text: &str) -> Result<Query> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ClientError::validation(
            "Please write something before posting.",
        ));
    }
    let token = ctx.require_token(TokenSlot::User, LOGIN_REQUIRED).await?;

    info!("{:<12} --> 문의 등록 product: {}", "Query", product_id);
    let request = ctx
        .api
        .request(Method::POST, routes::QUERY_POST, Some(&token))
        .json(&PostQueryCommand {
            product_id,
            query: text,
        });
    let QueryEnvelope { query } = ctx.api.send_json(request, "Failed to post query").await?;
    Ok(query)
}

/// 3. 내 문의 수정
pub async fn edit_query(ctx: &AppContext, query_id: i64, text: &str) -> Result<Query> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ClientError::validation("Query cannot be empty."));
    }
    let token = ctx.require_token(TokenSlot::User, LOGIN_REQUIRED).await?;

    info!("{:<12} --> 문의 수정 id: {}", "Query", query_id);
    let request = ctx
        .api
        .request(Method::PUT, &routes::query_edit(query_id), Some(&token))
        .json(&EditQueryCommand { query: text });
    let QueryEnvelope { query } = ctx.api.send_json(request, "Failed to edit query").await?;
    Ok(query)
}

/// 4. 내 문의 삭제
pub async fn delete_query(ctx: &AppContext, query_id: i64) -> Result<()> {
    let token = ctx.require_token(TokenSlot::User, LOGIN_REQUIRED).await?;

    info!("{:<12} --> 문의 삭제 id: {}", "Query", query_id);
    let request = ctx
        .api
        .request(Method::DELETE, &routes::query_delete(query_id), Some(&token));
    ctx.api.send_empty(request, "Failed to delete query").await
}

/// 5. 판매자 답변. 갱신된 답변 내용을 돌려준다.
pub async fn respond_to_query(ctx: &AppContext, query_id: i64, reply: &str) -> Result<String> {
    let reply = reply.trim();
    if reply.is_empty() {
        return Err(ClientError::validation("Reply cannot be empty."));
    }
    let token = ctx
        .require_token(TokenSlot::User, "Please log in to reply")
        .await?;

    info!("{:<12} --> 문의 답변 id: {}", "Query", query_id);
    let request = ctx
        .api
        .request(Method::POST, &routes::query_respond(query_id), Some(&token))
        .json(&RespondCommand { reply });
    let RespondEnvelope { query } = ctx
        .api
        .send_json(request, "Failed to respond to query")
        .await?;
    Ok(query.reply.unwrap_or_else(|| reply.to_string()))
}
