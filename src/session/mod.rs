// region:    --- Imports
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Token Slot
/// 토큰 종류. 일반 사용자와 관리자 토큰은 따로 보관한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSlot {
    User,
    Admin,
}

/// 저장소에 기록되는 세션 내용
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,
}

impl SessionData {
    fn slot(&self, slot: TokenSlot) -> Option<&String> {
        match slot {
            TokenSlot::User => self.token.as_ref(),
            TokenSlot::Admin => self.admin_token.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: TokenSlot) -> &mut Option<String> {
        match slot {
            TokenSlot::User => &mut self.token,
            TokenSlot::Admin => &mut self.admin_token,
        }
    }
}

// endregion: --- Token Slot

// region:    --- Session Store Trait
/// 세션 토큰 저장소 트레이트
/// 토큰이 있으면 로그인 상태, 없으면 익명 상태로 본다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, slot: TokenSlot) -> Result<Option<String>>;
    async fn set(&self, slot: TokenSlot, token: String) -> Result<()>;
    async fn clear(&self, slot: TokenSlot) -> Result<()>;

    async fn is_logged_in(&self, slot: TokenSlot) -> Result<bool> {
        Ok(self.get(slot).await?.is_some())
    }
}

// endregion: --- Session Store Trait

// region:    --- File Session Store
/// JSON 파일 기반 세션 저장소
pub struct FileSessionStore {
    path: PathBuf,
    // 같은 프로세스 안에서 읽기-수정-쓰기가 겹치지 않도록
    lock: RwLock<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    async fn load(&self) -> Result<SessionData> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(SessionData::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SessionData::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, data: &SessionData) -> Result<()> {
        if data.token.is_none() && data.admin_token.is_none() {
            match tokio::fs::remove_file(&self.path).await {
                Ok(_) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            return Ok(());
        }
        let body = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, slot: TokenSlot) -> Result<Option<String>> {
        let _guard = self.lock.read().await;
        let data = self.load().await?;
        Ok(data.slot(slot).cloned())
    }

    async fn set(&self, slot: TokenSlot, token: String) -> Result<()> {
        let _guard = self.lock.write().await;
        let mut data = self.load().await?;
        *data.slot_mut(slot) = Some(token);
        self.save(&data).await?;
        info!("{:<12} --> 토큰 저장: {:?} ({})", "Session", slot, self.path.display());
        Ok(())
    }

    async fn clear(&self, slot: TokenSlot) -> Result<()> {
        let _guard = self.lock.write().await;
        let mut data = self.load().await?;
        *data.slot_mut(slot) = None;
        self.save(&data).await?;
        info!("{:<12} --> 토큰 삭제: {:?}", "Session", slot);
        Ok(())
    }
}

// endregion: --- File Session Store

// region:    --- Memory Session Store
/// 메모리 세션 저장소 (프로세스 종료 시 사라짐)
#[derive(Default)]
pub struct MemorySessionStore {
    data: RwLock<SessionData>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, slot: TokenSlot) -> Result<Option<String>> {
        Ok(self.data.read().await.slot(slot).cloned())
    }

    async fn set(&self, slot: TokenSlot, token: String) -> Result<()> {
        debug!("{:<12} --> 메모리 토큰 저장: {:?}", "Session", slot);
        *self.data.write().await.slot_mut(slot) = Some(token);
        Ok(())
    }

    async fn clear(&self, slot: TokenSlot) -> Result<()> {
        *self.data.write().await.slot_mut(slot) = None;
        Ok(())
    }
}

// endregion: --- Memory Session Store
