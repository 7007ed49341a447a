/// 로그인 / 회원가입(OTP 요청 -> OTP 확인) 흐름 컨트롤러
/// 1. 로그인
/// 2. OTP 요청
/// 3. OTP 확인 후 자동 로그인
// region:    --- Imports
use super::model::{
    Hostel, LoginRequest, OtpRequest, SignupDetails, TokenResponse, VerifyOtpRequest,
};
use super::validation;
use crate::api::routes;
use crate::context::AppContext;
use crate::error::{ClientError, Result};
use crate::feedback::{record, FormStatus};
use crate::session::TokenSlot;
use reqwest::Method;
use serde_json::Value;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Auth Step
/// 인증 화면 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Login,
    SignupDetails,
    SignupOtpVerify,
    Authenticated,
}

/// 검증을 통과한 회원가입 정보. OTP 확인 단계까지 들고 간다.
#[derive(Debug, Clone)]
struct PendingSignup {
    name: String,
    roll_no: String,
    phone_no: String,
    email: String,
    password: String,
    hostel: Hostel,
}

impl PendingSignup {
    fn validate(details: &SignupDetails) -> Result<Self> {
        validation::validate_required(&details.name, "Name")?;
        validation::validate_required(&details.roll_no, "Roll number")?;
        validation::validate_phone(&details.phone_no)?;
        validation::validate_email(&details.email)?;
        validation::validate_password(&details.password)?;
        let hostel = validation::parse_hostel(&details.hostel)?;

        Ok(Self {
            name: details.name.trim().to_string(),
            roll_no: details.roll_no.trim().to_string(),
            phone_no: details.phone_no.trim().to_string(),
            email: details.email.trim().to_string(),
            password: details.password.clone(),
            hostel,
        })
    }
}

// endregion: --- Auth Step

// region:    --- Auth Flow
pub struct AuthFlow {
    ctx: AppContext,
    step: AuthStep,
    pending: Option<PendingSignup>,
    status: FormStatus,
}

impl AuthFlow {
    pub fn new(ctx: AppContext) -> Self {
        Self::with_step(ctx, AuthStep::Login)
    }

    /// 회원가입 탭에서 시작
    pub fn signup(ctx: AppContext) -> Self {
        Self::with_step(ctx, AuthStep::SignupDetails)
    }

    fn with_step(ctx: AppContext, step: AuthStep) -> Self {
        Self {
            ctx,
            step,
            pending: None,
            status: FormStatus::Idle,
        }
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// 로그인 탭 선택
    pub fn select_login(&mut self) {
        self.step = AuthStep::Login;
        self.pending = None;
        self.status = FormStatus::Idle;
    }

    /// 회원가입 탭 선택. OTP 단계에 있었다면 처음부터 다시 시작한다.
    pub fn select_signup(&mut self) {
        self.step = AuthStep::SignupDetails;
        self.pending = None;
        self.status = FormStatus::Idle;
    }

    /// 1. 로그인
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let result = match self.step {
            AuthStep::Login | AuthStep::Authenticated => self.do_login(email, password).await,
            _ => Err(ClientError::InvalidState(
                "Switch to the login tab to log in.".to_string(),
            )),
        };
        if result.is_ok() {
            self.step = AuthStep::Authenticated;
        }
        record(&mut self.status, result, |_| {
            Some("Logged in successfully!".to_string())
        })
    }

    async fn do_login(&self, email: &str, password: &str) -> Result<()> {
        validation::validate_email(email)?;
        validation::validate_required(password, "Password")?;

        info!("{:<12} --> 로그인 요청: {}", "Auth", email.trim());
        let request = self
            .ctx
            .api
            .request(Method::POST, routes::AUTH_LOGIN, None)
            .json(&LoginRequest {
                email: email.trim(),
                password,
            });
        let TokenResponse { token } = self.ctx.api.send_json(request, "Login failed").await?;
        self.ctx.session.set(TokenSlot::User, token).await?;
        Ok(())
    }

    /// 2. OTP 요청
    /// 백엔드가 수락한 경우에만 OTP 확인 단계로 넘어간다.
    pub async fn request_otp(&mut self, details: &SignupDetails) -> Result<()> {
        let result = self.do_request_otp(details).await;
        match &result {
            Ok(pending) => {
                self.pending = Some(pending.clone());
                self.step = AuthStep::SignupOtpVerify;
            }
            Err(e) => warn!("{:<12} --> OTP 요청 실패: {}", "Auth", e),
        }
        record(&mut self.status, result.map(|_| ()), |_| {
            Some("OTP sent to your email!".to_string())
        })
    }

    async fn do_request_otp(&self, details: &SignupDetails) -> Result<PendingSignup> {
        if self.step != AuthStep::SignupDetails {
            return Err(ClientError::InvalidState(
                "Fill in your details on the signup tab first.".to_string(),
            ));
        }
        let pending = PendingSignup::validate(details)?;

        info!("{:<12} --> OTP 요청: {}", "Auth", pending.email);
        let request = self
            .ctx
            .api
            .request(Method::POST, routes::AUTH_REQUEST_OTP, None)
            .json(&OtpRequest {
                email: &pending.email,
            });
        self.ctx
            .api
            .send_json::<Value>(request, "OTP request failed")
            .await?;
        Ok(pending)
    }

    /// 3. OTP 확인 및 가입, 이어서 자동 로그인
    pub async fn verify_otp(&mut self, otp: &str) -> Result<()> {
        let pending = match (self.step, self.pending.clone()) {
            (AuthStep::SignupOtpVerify, Some(pending)) => pending,
            _ => {
                let err = ClientError::InvalidState("Request an OTP first.".to_string());
                self.status = FormStatus::error(&err);
                return Err(err);
            }
        };

        if let Err(e) = self.do_verify_otp(&pending, otp).await {
            // OTP 단계 유지, 다시 입력 가능
            self.status = FormStatus::error(&e);
            return Err(e);
        }
        info!("{:<12} --> 회원가입 성공: {}", "Auth", pending.email);
        self.pending = None;

        match self.do_login(&pending.email, &pending.password).await {
            Ok(()) => {
                self.step = AuthStep::Authenticated;
                self.status = FormStatus::success("Signup successful! You are now logged in.");
                Ok(())
            }
            Err(e) => {
                // 계정은 생성됨. 로그인 탭으로 보내 수동 로그인을 유도
                warn!("{:<12} --> 가입 후 자동 로그인 실패: {}", "Auth", e);
                self.step = AuthStep::Login;
                let err = ClientError::Validation(format!(
                    "Signup successful, but automatic login failed ({}). Please login.",
                    e
                ));
                self.status = FormStatus::error(&err);
                Err(err)
            }
        }
    }

    async fn do_verify_otp(&self, pending: &PendingSignup, otp: &str) -> Result<()> {
        validation::validate_otp(otp)?;
        let request = self
            .ctx
            .api
            .request(Method::POST, routes::AUTH_VERIFY_OTP, None)
            .json(&VerifyOtpRequest {
                name: &pending.name,
                roll_no: &pending.roll_no,
                phone_no: &pending.phone_no,
                email: &pending.email,
                password: &pending.password,
                hostel: pending.hostel,
                otp: otp.trim(),
            });
        self.ctx
            .api
            .send_json::<Value>(request, "Signup failed")
            .await?;
        Ok(())
    }

    /// 로그아웃: 사용자 토큰 삭제
    pub async fn logout(&mut self) -> Result<()> {
        self.ctx.session.clear(TokenSlot::User).await?;
        self.step = AuthStep::Login;
        self.pending = None;
        self.status = FormStatus::success("Logged out.");
        info!("{:<12} --> 로그아웃", "Auth");
        Ok(())
    }
}

// endregion: --- Auth Flow
