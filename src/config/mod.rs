/// 환경 변수 기반 설정
/// .env 파일이 있으면 먼저 읽는다.
// region:    --- Imports
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

// endregion: --- Imports

// region:    --- Defaults
const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_LISTING_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_FILE: &str = ".bazaar-session.json";

// endregion: --- Defaults

// region:    --- Client Config
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 백엔드 호스트 (예: http://localhost:5000)
    pub api_url: String,
    /// 상품 목록 조회 타임아웃
    pub listing_timeout: Duration,
    /// 세션 토큰 저장 파일
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let api_url = std::env::var("BAZAAR_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let listing_timeout = match std::env::var("BAZAAR_LISTING_TIMEOUT_SECS") {
            Ok(v) => match v.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs.max(1)),
                Err(_) => {
                    warn!(
                        "{:<12} --> BAZAAR_LISTING_TIMEOUT_SECS 값이 잘못됨: {}, 기본값 사용",
                        "Config", v
                    );
                    Duration::from_secs(DEFAULT_LISTING_TIMEOUT_SECS)
                }
            },
            Err(_) => Duration::from_secs(DEFAULT_LISTING_TIMEOUT_SECS),
        };

        let session_file = std::env::var("BAZAAR_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Self {
            api_url,
            listing_timeout,
            session_file,
        }
    }

    /// 지정한 호스트로 설정 생성 (나머지는 기본값)
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            listing_timeout: Duration::from_secs(DEFAULT_LISTING_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

// endregion: --- Client Config
