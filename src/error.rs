// region:    --- Imports
use reqwest::StatusCode;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Client Error
/// 클라이언트 공통 에러
#[derive(Error, Debug)]
pub enum ClientError {
    /// 요청 전 클라이언트 측 검증 실패
    #[error("{0}")]
    Validation(String),

    /// 세션 토큰 없음
    #[error("{0}")]
    NotLoggedIn(String),

    /// 백엔드가 2xx 이외의 상태로 응답
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// 세션 파일, 이미지 파일, 표준 입력
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 현재 단계에서 허용되지 않는 동작
    #[error("{0}")]
    InvalidState(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }

    /// HTTP 상태 코드 (백엔드 응답 에러일 때만)
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

// endregion: --- Client Error
