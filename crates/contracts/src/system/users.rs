use crate::shared::access::Role;
use crate::shared::list_view::TableRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Banned,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Banned => "banned",
        }
    }

    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Banned];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    pub status: UserStatus,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub created_by: Option<String>,
}

impl TableRecord for User {
    fn matches_text(&self, query: &str) -> bool {
        self.username.to_lowercase().contains(query)
            || self
                .display_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query)
            || self
                .company
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query)
            || self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(query)
    }

    fn compare_by_column(&self, other: &Self, column: &str) -> Option<std::cmp::Ordering> {
        match column {
            "username" => Some(
                self.username
                    .to_lowercase()
                    .cmp(&other.username.to_lowercase()),
            ),
            "displayName" => Some(
                self.display_name
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .cmp(&other.display_name.as_deref().unwrap_or("").to_lowercase()),
            ),
            "company" => Some(
                self.company
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .cmp(&other.company.as_deref().unwrap_or("").to_lowercase()),
            ),
            "role" => Some(self.role.as_str().cmp(other.role.as_str())),
            "isVerified" => Some(self.is_verified.cmp(&other.is_verified)),
            "status" => Some(self.status.as_str().cmp(other.status.as_str())),
            "created_at" => Some(self.created_at.cmp(&other.created_at)),
            _ => None,
        }
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn role_key(&self) -> Option<&str> {
        Some(self.role.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    pub status: UserStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub user_id: String,
    pub old_password: Option<String>, // None if admin changing someone else's password
    pub new_password: String,
}
