// region:    --- Imports
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

// endregion: --- Imports

// region:    --- Modules
pub mod routes;

// endregion: --- Modules

// region:    --- Error Body
/// 백엔드 에러 응답 본문 ({"error": "..."})
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// endregion: --- Error Body

// region:    --- Api Client
/// 백엔드 REST 클라이언트
/// 재시도/캐시 없이 요청 하나에 응답 하나.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    listing_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("campus-bazaar/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            listing_timeout: config.listing_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 상품 목록 조회에만 적용되는 고정 타임아웃
    pub fn listing_timeout(&self) -> Duration {
        self.listing_timeout
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 요청 생성. 토큰이 있으면 Bearer 헤더를 붙인다.
    pub fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        debug!("{:<12} --> {} {}", "Api", method, path);
        let builder = self.http.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 요청 전송 후 JSON 응답 디코딩
    /// 실패 응답이면 본문의 error 필드, 없으면 fallback 메시지를 쓴다.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T> {
        let bytes = self.send_raw(request, fallback).await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("{:<12} --> 응답 디코딩 실패: {}", "Api", e);
            ClientError::Decode(e.to_string())
        })
    }

    /// 본문이 필요 없는 요청 (삭제 등)
    pub async fn send_empty(&self, request: RequestBuilder, fallback: &str) -> Result<()> {
        self.send_raw(request, fallback).await.map(|_| ())
    }

    async fn send_raw(&self, request: RequestBuilder, fallback: &str) -> Result<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?.to_vec();

        if status.is_success() {
            return Ok(bytes);
        }

        let message = error_message(status, &bytes, fallback);
        info!("{:<12} --> 요청 실패: {} {}", "Api", status, message);
        Err(ClientError::Api { status, message })
    }
}

fn error_message(status: StatusCode, body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("{}: {}", fallback, status.as_u16()))
}

// endregion: --- Api Client
