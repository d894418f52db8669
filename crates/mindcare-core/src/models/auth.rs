use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub department: String,
    pub year: String,
}

/// Payload returned by both login and register.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthUserData {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthUserData {
    /// The user record cached locally after a successful sign-in.
    pub fn to_user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
            name: Some(self.name.clone()),
            department: None,
            year: None,
            role: Some(self.role.clone()),
            created_at: None,
            updated_at: None,
        }
    }
}
