use crate::error::{ClientError, Result};
use crate::listing::model::{Product, ProductUpdate};
use serde::{Deserialize, Serialize};

// 낙찰자 정보 (판매 완료 후에만 조회 가능)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerInfo {
    pub name: String,
    #[serde(default)]
    pub roll_no: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hostel: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BuyerEnvelope {
    pub buyer: BuyerInfo,
}

// 상품 수정 폼 입력값
#[derive(Debug, Clone, Default)]
pub struct ProductEdit {
    pub name: String,
    pub description: String,
    pub asking_price: String,
    pub image: String,
}

impl ProductEdit {
    /// 현재 상품 값으로 채운 수정 폼
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            asking_price: product.asking_price.to_string(),
            image: product.image.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ProductUpdate> {
        let name = self.name.trim();
        let price = self.asking_price.trim().parse::<f64>().ok();
        match (name.is_empty(), price) {
            (false, Some(asking_price)) if asking_price.is_finite() && asking_price >= 0.0 => {
                Ok(ProductUpdate {
                    name: name.to_string(),
                    description: self.description.trim().to_string(),
                    asking_price,
                    image: self.image.trim().to_string(),
                })
            }
            _ => Err(ClientError::validation(
                "Please provide valid name and asking price.",
            )),
        }
    }
}
