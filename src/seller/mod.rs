// region:    --- Imports
use crate::bidding::commands::fetch_product_bids;
use crate::bidding::Bid;
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::feedback::{record, FormStatus};
use crate::listing::model::{Product, ProductStatus};
use crate::query::QueryPanel;
use tracing::info;

// endregion: --- Imports

// region:    --- Modules
pub mod commands;
pub mod model;

pub use model::{BuyerInfo, ProductEdit};

// endregion: --- Modules

// region:    --- My Listings
/// 내가 등록한 상품 목록
pub struct MyListings {
    ctx: AppContext,
    products: Vec<Product>,
    status: FormStatus,
}

impl MyListings {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            products: Vec::new(),
            status: FormStatus::Idle,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub async fn load(&mut self) -> Result<usize> {
        let result = commands::fetch_my_listings(&self.ctx).await;
        self.products = record(&mut self.status, result, |_| None)?;
        Ok(self.products.len())
    }
}

// endregion: --- My Listings

// region:    --- Seller Panel
/// 판매자 상품 관리 화면
pub struct SellerPanel {
    ctx: AppContext,
    product_id: i64,
    product: Option<Product>,
    bids: Vec<Bid>,
    queries: QueryPanel,
    buyer: Option<BuyerInfo>,
    deleted: bool,
    status: FormStatus,
    edit_status: FormStatus,
}

impl SellerPanel {
    pub fn new(ctx: AppContext, product_id: i64) -> Self {
        let queries = QueryPanel::new(ctx.clone(), product_id);
        Self {
            ctx,
            product_id,
            product: None,
            bids: Vec::new(),
            queries,
            buyer: None,
            deleted: false,
            status: FormStatus::Idle,
            edit_status: FormStatus::Idle,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn queries(&self) -> &QueryPanel {
        &self.queries
    }

    pub fn buyer(&self) -> Option<&BuyerInfo> {
        self.buyer.as_ref()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn edit_status(&self) -> &FormStatus {
        &self.edit_status
    }

    /// 수정 폼 초기값
    pub fn edit_form(&self) -> Option<ProductEdit> {
        self.product.as_ref().map(ProductEdit::from_product)
    }

    /// 상품, 입찰 목록, 문의 조회
    pub async fn load(&mut self) -> Result<()> {
        let result = self.fetch_details().await;
        let (product, bids) = record(&mut self.status, result, |_| None)?;
        self.product = Some(product);
        self.bids = bids;
        self.queries.load().await?;
        Ok(())
    }

    async fn fetch_details(&self) -> Result<(Product, Vec<Bid>)> {
        let product = commands::fetch_product(&self.ctx, self.product_id).await?;
        let bids = fetch_product_bids(&self.ctx, self.product_id).await?;
        Ok((product, bids))
    }

    /// 상품 수정 저장
    pub async fn save_edit(&mut self, edit: &ProductEdit) -> Result<()> {
        let result = match edit.validate() {
            Ok(update) => commands::edit_product(&self.ctx, self.product_id, &update).await,
            Err(e) => Err(e),
        };
        let product = record(&mut self.edit_status, result, |_| {
            Some("Product updated successfully!".to_string())
        })?;
        self.product = Some(product);
        Ok(())
    }

    /// 상품 삭제
    pub async fn delete(&mut self) -> Result<()> {
        let result = commands::delete_product(&self.ctx, self.product_id).await;
        record(&mut self.status, result, |_| {
            Some("Product deleted.".to_string())
        })?;
        info!("{:<12} --> 상품 삭제 완료 id: {}", "Seller", self.product_id);
        self.deleted = true;
        self.product = None;
        Ok(())
    }

    /// 문의에 답변
    pub async fn reply(&mut self, query_id: i64, text: &str) -> Result<()> {
        self.queries.respond(query_id, text).await
    }

    /// 낙찰자 정보. 판매 완료된 상품에서만 조회한다.
    pub async fn buyer_info(&mut self) -> Result<&BuyerInfo> {
        let sold = self
            .product
            .as_ref()
            .is_some_and(|p| p.status == ProductStatus::Sold);
        let result = if sold {
            commands::fetch_buyer_info(&self.ctx, self.product_id).await
        } else {
            Err(ClientError::InvalidState(
                "Buyer details are available once the product is sold.".to_string(),
            ))
        };
        let buyer = record(&mut self.status, result, |_| None)?;
        Ok(self.buyer.insert(buyer))
    }
}

// endregion: --- Seller Panel
