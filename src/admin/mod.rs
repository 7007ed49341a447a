/// 관리자 승인 대시보드
/// 사용자 로그인과 별개의 토큰을 사용한다.
// region:    --- Imports
use crate::api::routes;
use crate::auth::model::TokenResponse;
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::feedback::{record, FormStatus};
use crate::listing::model::{Product, ProductsEnvelope};
use crate::session::TokenSlot;
use model::{AdminLoginRequest, ApproveCommand};
use reqwest::Method;
use serde_json::Value;
use tracing::info;

// endregion: --- Imports

// region:    --- Modules
pub mod model;

pub use model::ApprovalDecision;

// endregion: --- Modules

const LOGIN_REQUIRED: &str = "Please log in as admin";

// region:    --- Admin Dashboard
pub struct AdminDashboard {
    ctx: AppContext,
    products: Vec<Product>,
    login_status: FormStatus,
    status: FormStatus,
}

impl AdminDashboard {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            products: Vec::new(),
            login_status: FormStatus::Idle,
            status: FormStatus::Idle,
        }
    }

    /// 승인 대기 상품
    pub fn pending(&self) -> &[Product] {
        &self.products
    }

    pub fn login_status(&self) -> &FormStatus {
        &self.login_status
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub async fn is_logged_in(&self) -> Result<bool> {
        self.ctx.session.is_logged_in(TokenSlot::Admin).await
    }

    /// 관리자 로그인 후 승인 대기 목록 조회
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let result = self.do_login(username, password).await;
        record(&mut self.login_status, result, |_| {
            Some("Logged in successfully!".to_string())
        })?;
        self.refresh().await.map(|_| ())
    }

    async fn do_login(&self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::validation(
                "Please enter username and password.",
            ));
        }
        info!("{:<12} --> 관리자 로그인: {}", "Admin", username.trim());
        let request = self
            .ctx
            .api
            .request(Method::POST, routes::ADMIN_LOGIN, None)
            .json(&AdminLoginRequest {
                username: username.trim(),
                password,
            });
        let TokenResponse { token } = self.ctx.api.send_json(request, "Login failed").await?;
        self.ctx.session.set(TokenSlot::Admin, token).await
    }

    /// 승인 대기 상품 조회
    pub async fn refresh(&mut self) -> Result<usize> {
        let result = self.fetch_pending().await;
        self.products = record(&mut self.status, result, |_| None)?;
        Ok(self.products.len())
    }

    async fn fetch_pending(&self) -> Result<Vec<Product>> {
        let token = self
            .ctx
            .require_token(TokenSlot::Admin, LOGIN_REQUIRED)
            .await?;
        info!("{:<12} --> 승인 대기 상품 조회", "Admin");
        let request = self
            .ctx
            .api
            .request(Method::GET, routes::ADMIN_PENDING_PRODUCTS, Some(&token));
        let ProductsEnvelope { products } = self
            .ctx
            .api
            .send_json(request, "Failed to fetch approval-pending products")
            .await?;
        Ok(products)
    }

    pub async fn approve(&mut self, product_id: i64) -> Result<()> {
        self.decide(product_id, ApprovalDecision::Approve).await
    }

    pub async fn disapprove(&mut self, product_id: i64) -> Result<()> {
        self.decide(product_id, ApprovalDecision::Disapprove).await
    }

    /// 승인/거절 후 성공하면 목록에서 제거
    async fn decide(&mut self, product_id: i64, decision: ApprovalDecision) -> Result<()> {
        let result = self.send_decision(product_id, decision).await;
        record(&mut self.status, result, |_| {
            Some(match decision {
                ApprovalDecision::Approve => "Product approved.".to_string(),
                ApprovalDecision::Disapprove => "Product disapproved.".to_string(),
            })
        })?;
        self.products.retain(|p| p.product_id != product_id);
        Ok(())
    }

    async fn send_decision(&self, product_id: i64, decision: ApprovalDecision) -> Result<()> {
        let token = self
            .ctx
            .require_token(TokenSlot::Admin, LOGIN_REQUIRED)
            .await?;
        info!(
            "{:<12} --> 승인 처리 id: {}, 결정: {:?}",
            "Admin", product_id, decision
        );
        let fallback = match decision {
            ApprovalDecision::Approve => "Failed to approve product",
            ApprovalDecision::Disapprove => "Failed to disapprove product",
        };
        let request = self
            .ctx
            .api
            .request(Method::POST, routes::ADMIN_APPROVE_PRODUCT, Some(&token))
            .json(&ApproveCommand {
                product_id,
                status: decision,
            });
        self.ctx.api.send_json::<Value>(request, fallback).await?;
        Ok(())
    }

    /// 관리자 로그아웃
    pub async fn logout(&mut self) -> Result<()> {
        self.ctx.session.clear(TokenSlot::Admin).await?;
        self.products.clear();
        self.login_status = FormStatus::Idle;
        self.status = FormStatus::success("Logged out.");
        Ok(())
    }
}

// endregion: --- Admin Dashboard
