//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::{Role, UserStatus};

use crate::dto::{auth::UserInfoDto, user::UserDto};

/// Wire name for a role, as stored in token claims and DTOs.
pub fn role_name(role: &Role) -> &'static str {
    match role {
        Role::User => "USER",
        Role::Admin => "ADMIN",
    }
}

/// Parses a role from its wire name. Unknown values return `None` rather than
/// defaulting, so a forged claim cannot silently downgrade into a valid role.
pub fn role_from_name(name: &str) -> Option<Role> {
    match name {
        "USER" => Some(Role::User),
        "ADMIN" => Some(Role::Admin),
        _ => None,
    }
}

fn status_name(status: &UserStatus) -> &'static str {
    match status {
        UserStatus::Normal => "NORMAL",
        UserStatus::Disabled => "DISABLED",
    }
}

/// User profile without the password hash.
///
/// The hash is dropped at the repository boundary so it cannot leak into a
/// response by accident.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub avatar: String,
    pub bio: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to the domain model, discarding the password
    /// hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            nickname: entity.nickname,
            avatar: entity.avatar,
            bio: entity.bio,
            role: entity.role,
            status: entity.status,
            email_verified: entity.email_verified,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }

    /// Converts to the full profile DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            nickname: self.nickname,
            avatar: self.avatar,
            bio: self.bio,
            role: role_name(&self.role).to_string(),
            status: status_name(&self.status).to_string(),
            email_verified: self.email_verified,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }

    /// Converts to the compact profile embedded in login responses.
    pub fn into_info_dto(self) -> UserInfoDto {
        UserInfoDto {
            id: self.id,
            username: self.username,
            email: self.email,
            nickname: self.nickname,
            avatar: self.avatar,
            role: role_name(&self.role).to_string(),
        }
    }
}

/// Parameters for inserting a new user during registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub nickname: String,
    pub avatar: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Parameters for a profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}
