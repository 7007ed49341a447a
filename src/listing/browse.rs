/// 상품 목록 조회 및 클라이언트 측 필터링
/// 페이지 로드 시 한 번만 조회하고, 필터는 메모리에서 적용한다.
// region:    --- Imports
use super::model::{Category, Product, ProductsEnvelope};
use crate::api::routes;
use crate::context::AppContext;
use crate::error::Result;
use crate::feedback::{record, FormStatus};
use reqwest::Method;
use std::fmt;
use std::str::FromStr;
use tracing::info;

// endregion: --- Imports

// region:    --- Filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

/// 카테고리 일치 + 이름 부분 문자열(대소문자 무시)
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub category: CategoryFilter,
    pub search: String,
}

impl ListingFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => product.category == Some(c),
        };
        let needle = self.search.trim().to_lowercase();
        category_ok && (needle.is_empty() || product.name.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

// endregion: --- Filter

// region:    --- Listing Browser
pub struct ListingBrowser {
    ctx: AppContext,
    listings: Vec<Product>,
    filter: ListingFilter,
    status: FormStatus,
}

impl ListingBrowser {
    pub fn new(ctx: AppContext) -> Self {
        Self::with_category(ctx, CategoryFilter::All)
    }

    /// 카테고리를 미리 선택한 상태로 시작
    pub fn with_category(ctx: AppContext, category: CategoryFilter) -> Self {
        Self {
            ctx,
            listings: Vec::new(),
            filter: ListingFilter {
                category,
                search: String::new(),
            },
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    /// 활성 상품 목록 조회 (고정 타임아웃 적용)
    pub async fn load(&mut self) -> Result<usize> {
        let result = self.fetch().await;
        let listings = record(&mut self.status, result, |_| None)?;
        info!("{:<12} --> 상품 {}개 조회", "Browse", listings.len());
        self.listings = listings;
        Ok(self.listings.len())
    }

    async fn fetch(&self) -> Result<Vec<Product>> {
        let request = self
            .ctx
            .api
            .request(Method::GET, routes::SELLER_ACTIVE_LISTINGS, None)
            .timeout(self.ctx.api.listing_timeout());
        let ProductsEnvelope { products } = self
            .ctx
            .api
            .send_json(request, "Failed to fetch listings")
            .await?;
        Ok(products)
    }

    /// 현재 필터를 적용한 목록
    pub fn visible(&self) -> Vec<&Product> {
        self.filter.apply(&self.listings)
    }

    pub fn empty_message(&self) -> &'static str {
        match self.filter.category {
            CategoryFilter::All if self.filter.search.trim().is_empty() => {
                "No products available."
            }
            CategoryFilter::All => "No products match your search.",
            CategoryFilter::Only(_) => "No products available in this category.",
        }
    }
}

// endregion: --- Listing Browser
