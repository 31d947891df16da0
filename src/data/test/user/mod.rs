use crate::{
    data::{is_unique_violation, user::UserRepository},
    model::user::{CreateUserParams, UpdateProfileParams},
};
use entity::user::{Role, UserStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_username;
mod update_profile;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        password_hash: "$2b$04$not.a.real.hash".to_string(),
        email: email.to_string(),
        nickname: username.to_string(),
        avatar: "https://example.com/avatar.png".to_string(),
        role: Role::User,
        status: UserStatus::Normal,
    }
}
