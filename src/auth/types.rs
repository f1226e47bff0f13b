//! Authentication types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::core::models::{User, UserStatus};

use super::rbac::{Permission, RoleId};

/// Account details returned to the client after authentication
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    /// Account id
    pub id: Uuid,
    /// Username
    pub username: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Resolved role
    pub role: RoleId,
    /// Department within the studio
    pub department: Option<String>,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Last login timestamp
    pub last_login_at: Option<DateTime<Utc>>,
    /// Account status
    pub status: UserStatus,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username.clone(),
            name: user.display_name.clone(),
            email: user.email.clone(),
            role: RoleId::resolve(&user.role),
            department: user.department.clone(),
            avatar: user.avatar_url.clone(),
            last_login_at: user.last_login_at,
            status: user.status,
        }
    }
}

/// Successful login result
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Signed access token
    pub access_token: String,
    /// Token type for the Authorization header
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    /// The authenticated account
    pub user: UserInfo,
    /// Permissions the account holds, in catalog order
    pub permissions: Vec<Permission>,
}
