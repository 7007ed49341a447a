use crate::error::ClientError;
use std::fmt;

/// 폼마다 표시되는 인라인 메시지
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn success(msg: impl Into<String>) -> Self {
        FormStatus::Success(msg.into())
    }

    pub fn error(err: &ClientError) -> Self {
        FormStatus::Error(err.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormStatus::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Success(m) | FormStatus::Error(m) => Some(m),
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormStatus::Idle => Ok(()),
            FormStatus::Success(m) => write!(f, "{}", m),
            FormStatus::Error(m) => write!(f, "Error: {}", m),
        }
    }
}

/// 결과를 인라인 메시지에 반영하고 그대로 돌려준다
pub(crate) fn record<T>(
    status: &mut FormStatus,
    result: Result<T, ClientError>,
    success: impl FnOnce(&T) -> Option<String>,
) -> Result<T, ClientError> {
    match &result {
        Ok(value) => {
            *status = success(value).map(FormStatus::Success).unwrap_or_default();
        }
        Err(e) => *status = FormStatus::error(e),
    }
    result
}
