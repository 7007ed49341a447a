use crate::listing::model::lenient_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 입찰 모델 (판매자 화면에서 보는 입찰 목록)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    #[serde(default)]
    pub bid_id: Option<i64>,
    pub amount: f64,
    #[serde(default)]
    pub bidder_name: Option<String>,
    #[serde(default)]
    pub roll_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub bid_time: Option<DateTime<Utc>>,
}

impl Bid {
    pub fn bidder_or_anonymous(&self) -> &str {
        self.bidder_name.as_deref().unwrap_or("Anonymous")
    }
}

// 내 입찰 목록 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyBid {
    pub bid_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub amount: f64,
    pub asking_price: f64,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub deadline: Option<DateTime<Utc>>,
    // highest / outbid 등, 백엔드가 정한 값을 그대로 보여준다
    pub status: String,
}

impl MyBid {
    pub fn is_highest(&self) -> bool {
        self.status.eq_ignore_ascii_case("highest")
    }
}

// 입찰 명령
#[derive(Debug, Serialize, Clone)]
pub struct PlaceBidCommand {
    pub product_id: i64,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HighestBidResponse {
    #[serde(default)]
    pub highest_bid: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BidsEnvelope {
    #[serde(default)]
    pub bids: Vec<Bid>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MyBidsEnvelope {
    #[serde(default)]
    pub my_bids: Vec<MyBid>,
}
