//! Admin back-office wire models

use serde::Deserialize;

use super::Role;

/// Member row in the admin member-control list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub role: Role,
    /// Signup instant as reported by the server.
    pub registered_at: String,
    pub banned: bool,
}

/// One point of the admin signup chart: signups bucketed per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPoint {
    pub date: String,
    pub count: i64,
}
