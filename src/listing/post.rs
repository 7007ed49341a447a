/// 상품 등록 폼
/// 상품 생성 요청 후 이미지 업로드 요청을 순서대로 보낸다.
// region:    --- Imports
use super::model::{Category, NewProduct, Product, ProductEnvelope};
use crate::api::routes;
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::feedback::FormStatus;
use crate::session::TokenSlot;
use chrono::{Local, NaiveDate};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

// endregion: --- Imports

/// 상품당 최대 이미지 수
pub const MAX_IMAGES: usize = 4;

// region:    --- Draft
/// 업로드할 이미지 파일
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(ClientError::validation(format!(
                "{} is not an image file.",
                path.display()
            )));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self {
            file_name,
            mime: mime.essence_str().to_string(),
            bytes,
        })
    }
}

/// 등록 폼 입력값 (검증 전)
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub asking_price: String,
    pub category: String,
    /// YYYY-MM-DD
    pub deadline: Option<String>,
    pub images: Vec<ImageFile>,
}

impl ListingDraft {
    pub fn validate(&self, today: NaiveDate) -> Result<NewProduct> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::validation("Item name is required."));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ClientError::validation("Description is required."));
        }
        let asking_price = self
            .asking_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| ClientError::validation("Asking price must be a positive number."))?;
        let category = self
            .category
            .parse::<Category>()
            .map_err(ClientError::Validation)?;
        let deadline = match self.deadline.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => {
                let date = NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                    ClientError::validation("Deadline must be a date in YYYY-MM-DD format.")
                })?;
                if date < today {
                    return Err(ClientError::validation("Deadline cannot be in the past."));
                }
                Some(date)
            }
            _ => None,
        };

        Ok(NewProduct {
            name: name.to_string(),
            description: description.to_string(),
            asking_price,
            category,
            deadline,
        })
    }
}

// endregion: --- Draft

// region:    --- Posting Form
/// 등록 결과. 이미지 업로드가 실패해도 상품은 이미 생성되어 있다.
#[derive(Debug, Clone)]
pub struct PostOutcome {
    pub product: Product,
    pub images_uploaded: usize,
    pub image_error: Option<String>,
}

pub struct PostingForm {
    ctx: AppContext,
    status: FormStatus,
}

impl PostingForm {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// 등록 요청
    pub async fn submit(&mut self, draft: ListingDraft) -> Result<PostOutcome> {
        match self.do_submit(draft).await {
            Ok(outcome) => {
                self.status = match &outcome.image_error {
                    None => FormStatus::success(
                        "Item posted successfully! It will be visible once approved.",
                    ),
                    Some(e) => FormStatus::Error(format!(
                        "Listing created, but image upload failed: {}",
                        e
                    )),
                };
                Ok(outcome)
            }
            Err(e) => {
                self.status = FormStatus::error(&e);
                Err(e)
            }
        }
    }

    async fn do_submit(&self, mut draft: ListingDraft) -> Result<PostOutcome> {
        let new_product = draft.validate(Local::now().date_naive())?;
        let token = self
            .ctx
            .require_token(TokenSlot::User, "Please log in to post an item")
            .await?;

        if draft.images.len() > MAX_IMAGES {
            warn!(
                "{:<12} --> 이미지 {}개 중 앞의 {}개만 업로드",
                "Post",
                draft.images.len(),
                MAX_IMAGES
            );
            draft.images.truncate(MAX_IMAGES);
        }

        // 1. 상품 생성
        info!("{:<12} --> 상품 등록 요청: {}", "Post", new_product.name);
        let request = self
            .ctx
            .api
            .request(Method::POST, routes::SELLER_ADD_PRODUCT, Some(&token))
            .json(&new_product);
        let ProductEnvelope { product } = self
            .ctx
            .api
            .send_json(request, "Failed to post item")
            .await?;
        let product =
            product.ok_or_else(|| ClientError::Decode("product missing in response".to_string()))?;

        if draft.images.is_empty() {
            return Ok(PostOutcome {
                product,
                images_uploaded: 0,
                image_error: None,
            });
        }

        // 2. 이미지 업로드
        let count = draft.images.len();
        match self.upload_images(&token, product.product_id, draft.images).await {
            Ok(()) => {
                info!("{:<12} --> 이미지 {}개 업로드 완료", "Post", count);
                Ok(PostOutcome {
                    product,
                    images_uploaded: count,
                    image_error: None,
                })
            }
            Err(e) => {
                warn!("{:<12} --> 이미지 업로드 실패: {}", "Post", e);
                Ok(PostOutcome {
                    product,
                    images_uploaded: 0,
                    image_error: Some(e.to_string()),
                })
            }
        }
    }

    async fn upload_images(
        &self,
        token: &str,
        product_id: i64,
        images: Vec<ImageFile>,
    ) -> Result<()> {
        let mut form = Form::new();
        for image in images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime)?;
            form = form.part("images", part);
        }
        let request = self
            .ctx
            .api
            .request(
                Method::POST,
                &routes::seller_upload_images(product_id),
                Some(token),
            )
            .multipart(form);
        self.ctx
            .api
            .send_json::<Value>(request, "Failed to upload images")
            .await?;
        Ok(())
    }
}

// endregion: --- Posting Form
