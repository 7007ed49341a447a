// region:    --- Imports
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::session::{FileSessionStore, SessionStore, TokenSlot};
use std::sync::Arc;

// endregion: --- Imports

/// 각 화면 컨트롤러가 공유하는 것: REST 클라이언트와 세션 저장소
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<ApiClient>,
    pub session: Arc<dyn SessionStore>,
}

impl AppContext {
    pub fn new(api: Arc<ApiClient>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// 설정 파일 경로의 세션 파일을 쓰는 기본 구성
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api = Arc::new(ApiClient::new(config)?);
        let session: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));
        Ok(Self::new(api, session))
    }

    pub async fn token(&self, slot: TokenSlot) -> Result<Option<String>> {
        self.session.get(slot).await
    }

    /// 토큰이 없으면 요청하지 않고 바로 실패
    pub async fn require_token(&self, slot: TokenSlot, message: &str) -> Result<String> {
        self.session
            .get(slot)
            .await?
            .ok_or_else(|| ClientError::NotLoggedIn(message.to_string()))
    }
}
