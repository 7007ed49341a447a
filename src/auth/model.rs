use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// 기숙사. 클라이언트에서는 이 목록만 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hostel {
    #[serde(rename = "BH-1")]
    Bh1,
    #[serde(rename = "BH-2")]
    Bh2,
    #[serde(rename = "BH-3")]
    Bh3,
    #[serde(rename = "BH-4")]
    Bh4,
    #[serde(rename = "BH-5")]
    Bh5,
    #[serde(rename = "GH-1")]
    Gh1,
    #[serde(rename = "GH-2")]
    Gh2,
}

impl Hostel {
    pub const ALL: [Hostel; 7] = [
        Hostel::Bh1,
        Hostel::Bh2,
        Hostel::Bh3,
        Hostel::Bh4,
        Hostel::Bh5,
        Hostel::Gh1,
        Hostel::Gh2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hostel::Bh1 => "BH-1",
            Hostel::Bh2 => "BH-2",
            Hostel::Bh3 => "BH-3",
            Hostel::Bh4 => "BH-4",
            Hostel::Bh5 => "BH-5",
            Hostel::Gh1 => "GH-1",
            Hostel::Gh2 => "GH-2",
        }
    }
}

impl fmt::Display for Hostel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hostel {
    type Err = String;

    /// "bh1", "BH-1", "bh 1" 모두 허용
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        Hostel::ALL
            .into_iter()
            .find(|h| h.as_str().replace('-', "") == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Hostel::ALL.iter().map(|h| h.as_str()).collect();
                format!("Hostel must be one of: {}", names.join(", "))
            })
    }
}

// 사용자 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub roll_no: String,
    pub phone_no: String,
    pub email: String,
    // 기존 계정은 자유 입력값일 수 있어 그대로 보관한다. 검증은 입력 시에만.
    pub hostel: String,
}

// 회원가입 입력값 (OTP 요청 단계)
#[derive(Debug, Clone, Default)]
pub struct SignupDetails {
    pub name: String,
    pub roll_no: String,
    pub phone_no: String,
    pub email: String,
    pub password: String,
    pub hostel: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct OtpRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyOtpRequest<'a> {
    pub name: &'a str,
    pub roll_no: &'a str,
    pub phone_no: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub hostel: Hostel,
    pub otp: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: UserProfile,
}
