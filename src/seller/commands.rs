/// 판매자 상품 관련 요청
/// 1. 상품 단건 조회
/// 2. 내 상품 목록
/// 3. 상품 수정
/// 4. 상품 삭제
/// 5. 낙찰자 정보
// region:    --- Imports
use super::model::{BuyerEnvelope, BuyerInfo};
use crate::api::routes;
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::listing::model::{Product, ProductEnvelope, ProductUpdate, ProductsEnvelope};
use crate::session::TokenSlot;
use reqwest::{Method, StatusCode};
use tracing::info;

// endregion: --- Imports

/// 1. 상품 단건 조회
pub async fn fetch_product(ctx: &AppContext, product_id: i64) -> Result<Product> {
    info!("{:<12} --> 상품 조회 id: {}", "Seller", product_id);
    let token = ctx.token(TokenSlot::User).await?;
    let request = ctx.api.request(
        Method::GET,
        &routes::seller_product_by_id(product_id),
        token.as_deref(),
    );
    let ProductEnvelope { product } = ctx
        .api
        .send_json(request, "Failed to fetch product")
        .await?;
    product.ok_or_else(|| ClientError::Api {
        status: StatusCode::NOT_FOUND,
        message: "Product not found".to_string(),
    })
}

/// 2. 내 상품 목록
pub async fn fetch_my_listings(ctx: &AppContext) -> Result<Vec<Product>> {
    let token = ctx
        .require_token(TokenSlot::User, "Please log in to view your listings")
        .await?;
    info!("{:<12} --> 내 상품 목록 조회", "Seller");
    let request = ctx
        .api
        .request(Method::GET, routes::SELLER_MY_LISTINGS, Some(&token));
    let ProductsEnvelope { products } = ctx
        .api
        .send_json(request, "Failed to fetch listings")
        .await?;
    Ok(products)
}

/// 3. 상품 수정
pub async fn edit_product(
    ctx: &AppContext,
    product_id: i64,
    update: &ProductUpdate,
) -> Result<Product> {
    let token = ctx
        .require_token(TokenSlot::User, "Please log in to edit your product")
        .await?;
    info!("{:<12} --> 상품 수정 id: {}", "Seller", product_id);
    let request = ctx
        .api
        .request(Method::PUT, &routes::seller_edit_product(product_id), Some(&token))
        .json(update);
    let ProductEnvelope { product } = ctx
        .api
        .send_json(request, "Failed to update product")
        .await?;
    product.ok_or_else(|| ClientError::Decode("product missing in response".to_string()))
}

/// 4. 상품 삭제
pub async fn delete_product(ctx: &AppContext, product_id: i64) -> Result<()> {
    let token = ctx
        .require_token(TokenSlot::User, "Please log in to delete your product")
        .await?;
    info!("{:<12} --> 상품 삭제 id: {}", "Seller", product_id);
    let request = ctx.api.request(
        Method::DELETE,
        &routes::seller_delete_product(product_id),
        Some(&token),
    );
    ctx.api.send_empty(request, "Failed to delete product").await
}

/// 5. 낙찰자 정보
pub async fn fetch_buyer_info(ctx: &AppContext, product_id: i64) -> Result<BuyerInfo> {
    let token = ctx
        .require_token(TokenSlot::User, "Please log in to view buyer details")
        .await?;
    info!("{:<12} --> 낙찰자 정보 조회 id: {}", "Seller", product_id);
    let request = ctx.api.request(
        Method::GET,
        &routes::seller_buyer_info(product_id),
        Some(&token),
    );
    let BuyerEnvelope { buyer } = ctx
        .api
        .send_json(request, "Failed to fetch buyer info")
        .await?;
    Ok(buyer)
}
