/// 폼 제출 전 클라이언트 측 검증
/// 백엔드가 다시 검증하므로 여기서는 요청을 걸러내는 역할만 한다.
// region:    --- Imports
use super::model::Hostel;
use crate::error::{ClientError, Result};
use regex::Regex;
use std::sync::OnceLock;

// endregion: --- Imports

pub const MIN_PASSWORD_LEN: usize = 6;
pub const PHONE_DIGITS: usize = 10;
pub const OTP_DIGITS: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_email(email: &str) -> Result<()> {
    if email_regex().is_match(email.trim()) {
        Ok(())
    } else {
        Err(ClientError::validation("Please enter a valid email address."))
    }
}

pub fn validate_phone(phone: &str) -> Result<()> {
    if is_digits(phone.trim(), PHONE_DIGITS) {
        Ok(())
    } else {
        Err(ClientError::validation("Phone number must be exactly 10 digits."))
    }
}

pub fn validate_otp(otp: &str) -> Result<()> {
    if is_digits(otp.trim(), OTP_DIGITS) {
        Ok(())
    } else {
        Err(ClientError::validation("OTP must be a 6-digit code."))
    }
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ClientError::validation(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        )))
    }
}

pub fn validate_required(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ClientError::validation(format!("{} is required.", field)))
    } else {
        Ok(())
    }
}

pub fn parse_hostel(value: &str) -> Result<Hostel> {
    value.parse::<Hostel>().map_err(ClientError::Validation)
}
