use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Snapshot taken at login time; not refreshed until the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "totalActiveLoan", default)]
    pub total_active_loan: u32,
    #[serde(rename = "totalReturnedLoan", default)]
    pub total_returned_loan: u32,
    #[serde(rename = "totalPendingLoan", default)]
    pub total_pending_loan: u32,
    #[serde(rename = "totalOverDueLoan", default)]
    pub total_overdue_loan: u32,
    #[serde(rename = "totalReviewWritten", default)]
    pub total_review_written: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_role_mapping() {
        let json = r#"{"id":1,"name":"A","email":"a@example.com","role":"admin"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, "A");
    }

    #[test]
    fn auth_response_without_token_type() {
        let json = r#"{"access_token":"abc","user":{"id":1,"name":"A","email":"a@x.y","role":"user"}}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.access_token, "abc");
        assert!(auth.token_type.is_none());
    }

    #[test]
    fn user_stats_camel_case_fields() {
        let json = r#"{"totalActiveLoan":2,"totalReturnedLoan":5,"totalPendingLoan":1,"totalOverDueLoan":0,"totalReviewWritten":3}"#;
        let stats: UserStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_active_loan, 2);
        assert_eq!(stats.total_review_written, 3);
    }
}
