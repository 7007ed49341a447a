// region:    --- Imports
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::feedback::{record, FormStatus};
use crate::listing::model::{Product, ProductStatus};
use crate::query::QueryPanel;
use crate::seller::commands::fetch_product;
use model::PlaceBidCommand;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Modules
pub mod commands;
pub mod model;

pub use model::{Bid, MyBid};

// endregion: --- Modules

// region:    --- Product Panel
/// 상품 상세 화면: 상품 정보, 최고 입찰가, 입찰 폼, 문의 영역
pub struct ProductPanel {
    ctx: AppContext,
    product_id: i64,
    product: Option<Product>,
    highest_bid: Option<f64>,
    queries: QueryPanel,
    status: FormStatus,
    bid_status: FormStatus,
}

impl ProductPanel {
    pub fn new(ctx: AppContext, product_id: i64) -> Self {
        let queries = QueryPanel::new(ctx.clone(), product_id);
        Self {
            ctx,
            product_id,
            product: None,
            highest_bid: None,
            queries,
            status: FormStatus::Idle,
            bid_status: FormStatus::Idle,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// 마지막으로 알려진 최고 입찰가
    pub fn highest_bid(&self) -> Option<f64> {
        self.highest_bid
    }

    pub fn queries(&self) -> &QueryPanel {
        &self.queries
    }

    pub fn queries_mut(&mut self) -> &mut QueryPanel {
        &mut self.queries
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn bid_status(&self) -> &FormStatus {
        &self.bid_status
    }

    /// 상품, 최고 입찰가, 문의를 순서대로 조회
    pub async fn load(&mut self) -> Result<()> {
        let result = self.fetch_details().await;
        let (product, highest) = record(&mut self.status, result, |_| None)?;
        self.product = Some(product);
        self.highest_bid = highest;
        self.queries.load().await?;
        Ok(())
    }

    async fn fetch_details(&self) -> Result<(Product, Option<f64>)> {
        let product = fetch_product(&self.ctx, self.product_id).await?;
        let highest = commands::fetch_highest_bid(&self.ctx, self.product_id).await?;
        Ok((product, highest))
    }

    /// 입찰. 성공하면 최고 입찰가를 다시 조회해 맞춘다.
    pub async fn place_bid(&mut self, input: &str) -> Result<()> {
        let result = self.submit_bid(input).await;
        record(&mut self.bid_status, result, |_| {
            Some("Bid placed successfully!".to_string())
        })?;

        match commands::fetch_highest_bid(&self.ctx, self.product_id).await {
            Ok(highest) => self.highest_bid = highest,
            Err(e) => {
                warn!("{:<12} --> 입찰 후 최고가 재조회 실패: {}", "Bid", e);
            }
        }
        Ok(())
    }

    async fn submit_bid(&self, input: &str) -> Result<()> {
        let amount = commands::parse_bid_amount(input)?;
        if let Some(product) = &self.product {
            if product.status != ProductStatus::Active {
                return Err(ClientError::validation(format!(
                    "Bidding is closed for this product ({}).",
                    product.status
                )));
            }
        }
        let asking_price = self.product.as_ref().map(|p| p.asking_price);
        commands::check_bid(amount, commands::bid_floor(self.highest_bid, asking_price))?;

        info!(
            "{:<12} --> 입찰 제출 product: {}, amount: {}",
            "Bid", self.product_id, amount
        );
        commands::place_bid(
            &self.ctx,
            &PlaceBidCommand {
                product_id: self.product_id,
                amount,
            },
        )
        .await
    }
}

// endregion: --- Product Panel
