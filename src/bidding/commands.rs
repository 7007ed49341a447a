/// 입찰 관련 요청
/// 1. 입찰
/// 2. 최고 입찰가 조회
/// 3. 상품별 입찰 목록
/// 4. 내 입찰 목록
// region:    --- Imports
use super::model::{
    Bid, BidsEnvelope, HighestBidResponse, MyBid, MyBidsEnvelope, PlaceBidCommand,
};
use crate::api::routes;
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::session::TokenSlot;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

// endregion: --- Imports

// region:    --- Validation
/// 입력값을 입찰 금액으로 변환
pub fn parse_bid_amount(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ClientError::validation("Please enter a valid bid amount."))
}

/// 마지막으로 알려진 최고 입찰가보다 높아야 한다 (참고용 검사, 최종 판단은 서버)
pub fn check_bid(amount: f64, highest: Option<f64>) -> Result<()> {
    match highest {
        Some(highest) if amount <= highest => Err(ClientError::validation(
            "Your bid must be higher than the current highest bid.",
        )),
        None if amount <= 0.0 => Err(ClientError::validation(
            "Your bid must be greater than zero.",
        )),
        _ => Ok(()),
    }
}

/// 입찰 하한. 입찰이 아직 없으면 희망 가격을 기준으로 한다.
pub fn bid_floor(highest: Option<f64>, asking_price: Option<f64>) -> Option<f64> {
    highest.or(asking_price.filter(|p| p.is_finite() && *p > 0.0))
}

// endregion: --- Validation

// region:    --- Commands
/// 1. 입찰
pub async fn place_bid(ctx: &AppContext, cmd: &PlaceBidCommand) -> Result<()> {
    let token = ctx
        .require_token(TokenSlot::User, "Please log in to place a bid")
        .await?;
    info!("{:<12} --> 입찰 요청: {:?}", "Bid", cmd);
    let request = ctx
        .api
        .request(Method::POST, routes::BID_PLACE, Some(&token))
        .json(cmd);
    ctx.api
        .send_json::<Value>(request, "Failed to place bid")
        .await?;
    Ok(())
}

/// 2. 최고 입찰가 조회 (입찰이 없으면 None)
pub async fn fetch_highest_bid(ctx: &AppContext, product_id: i64) -> Result<Option<f64>> {
    info!("{:<12} --> 최고 입찰가 조회 id: {}", "Bid", product_id);
    let token = ctx.token(TokenSlot::User).await?;
    let request = ctx.api.request(
        Method::GET,
        &routes::bid_highest(product_id),
        token.as_deref(),
    );
    let HighestBidResponse { highest_bid } = ctx
        .api
        .send_json(request, "Failed to fetch highest bid")
        .await?;
    Ok(highest_bid)
}

/// 3. 상품별 입찰 목록
pub async fn fetch_product_bids(ctx: &AppContext, product_id: i64) -> Result<Vec<Bid>> {
    info!("{:<12} --> 입찰 목록 조회 id: {}", "Bid", product_id);
    let token = ctx.token(TokenSlot::User).await?;
    let request = ctx.api.request(
        Method::GET,
        &routes::bid_product(product_id),
        token.as_deref(),
    );
    let BidsEnvelope { bids } = ctx.api.send_json(request, "Failed to fetch bids").await?;
    Ok(bids)
}

/// 4. 내 입찰 목록
pub async fn fetch_my_bids(ctx: &AppContext) -> Result<Vec<MyBid>> {
    let token = ctx
        .require_token(TokenSlot::User, "Please log in to view your bids")
        .await?;
    info!("{:<12} --> 내 입찰 목록 조회", "Bid");
    let request = ctx
        .api
        .request(Method::GET, routes::BID_MY_BIDS, Some(&token));
    let MyBidsEnvelope { my_bids } = ctx
        .api
        .send_json(request, "Failed to fetch your bids")
        .await?;
    Ok(my_bids)
}

// endregion: --- Commands
