use serde::Serialize;

// 승인 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApprovalDecision {
    #[serde(rename = "active")]
    Approve,
    #[serde(rename = "disapproved")]
    Disapprove,
}

#[derive(Debug, Serialize)]
pub(crate) struct AdminLoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApproveCommand {
    pub product_id: i64,
    pub status: ApprovalDecision,
}
