/// 프로필 드로어: 로그인한 사용자의 프로필 조회 / 수정
// region:    --- Imports
use crate::api::routes;
use crate::auth::model::{UserEnvelope, UserProfile};
use crate::auth::validation;
use crate::context::AppContext;
use crate::error::Result;
use crate::feedback::{record, FormStatus};
use crate::session::TokenSlot;
use reqwest::Method;
use serde::Serialize;
use tracing::info;

// endregion: --- Imports

const LOGIN_REQUIRED: &str = "Please log in to view your profile";

// region:    --- Profile Edit
/// 수정 입력값. 비어 있는 필드는 기존 값을 유지한다.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub phone_no: Option<String>,
    pub email: Option<String>,
    pub hostel: Option<String>,
}

#[derive(Debug, Serialize)]
struct EditProfileRequest {
    name: String,
    roll_no: String,
    phone_no: String,
    email: String,
    hostel: String,
}

impl ProfileEdit {
    fn apply(&self, current: &UserProfile) -> Result<EditProfileRequest> {
        let pick = |edit: &Option<String>, current: &str| {
            edit.as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(current)
                .to_string()
        };

        let name = pick(&self.name, &current.name);
        let phone_no = pick(&self.phone_no, &current.phone_no);
        let email = pick(&self.email, &current.email);
        let hostel = match self.hostel.as_deref().map(str::trim) {
            Some(h) if !h.is_empty() => validation::parse_hostel(h)?.to_string(),
            _ => current.hostel.clone(),
        };

        validation::validate_required(&name, "Name")?;
        validation::validate_phone(&phone_no)?;
        validation::validate_email(&email)?;

        Ok(EditProfileRequest {
            name,
            // 학번은 수정 불가
            roll_no: current.roll_no.clone(),
            phone_no,
            email,
            hostel,
        })
    }
}

// endregion: --- Profile Edit

// region:    --- Profile Drawer
pub struct ProfileDrawer {
    ctx: AppContext,
    profile: Option<UserProfile>,
    status: FormStatus,
}

impl ProfileDrawer {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            profile: None,
            status: FormStatus::Idle,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// 드로어 열기 (프로필 조회). 실패하면 다시 호출해 재시도한다.
    /// 실패 시 이전에 읽은 프로필은 비운다.
    pub async fn open(&mut self) -> Result<&UserProfile> {
        let result = self.fetch().await;
        match record(&mut self.status, result, |_| None) {
            Ok(profile) => Ok(self.profile.insert(profile)),
            Err(e) => {
                self.profile = None;
                Err(e)
            }
        }
    }

    async fn fetch(&self) -> Result<UserProfile> {
        let token = self.ctx.require_token(TokenSlot::User, LOGIN_REQUIRED).await?;
        info!("{:<12} --> 프로필 조회", "Profile");
        let request = self
            .ctx
            .api
            .request(Method::GET, routes::AUTH_PROFILE, Some(&token));
        let UserEnvelope { user } = self
            .ctx
            .api
            .send_json(request, "Failed to fetch profile")
            .await?;
        Ok(user)
    }

    /// 프로필 저장
    pub async fn save(&mut self, edit: &ProfileEdit) -> Result<()> {
        let result = self.do_save(edit).await;
        if let Ok(profile) = &result {
            self.profile = Some(profile.clone());
        }
        record(&mut self.status, result.map(|_| ()), |_| {
            Some("Profile updated successfully!".to_string())
        })
    }

    async fn do_save(&self, edit: &ProfileEdit) -> Result<UserProfile> {
        let token = self.ctx.require_token(TokenSlot::User, LOGIN_REQUIRED).await?;
        let current = match &self.profile {
            Some(p) => p.clone(),
            None => self.fetch().await?,
        };
        let body = edit.apply(&current)?;

        info!("{:<12} --> 프로필 수정: {}", "Profile", body.email);
        let request = self
            .ctx
            .api
            .request(Method::PUT, routes::AUTH_EDIT_PROFILE, Some(&token))
            .json(&body);
        let UserEnvelope { user } = self
            .ctx
            .api
            .send_json(request, "Failed to update profile")
            .await?;
        Ok(user)
    }
}

// endregion: --- Profile Drawer
