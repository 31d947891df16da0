//! User profile service.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{business::BusinessError, AppError},
    model::user::{UpdateProfileParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the profile of the given user, without the password hash.
    pub async fn get_info(&self, user_id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(BusinessError::UserNotFound.into());
        };

        Ok(User::from_entity(user))
    }

    /// Applies a partial profile update restricted to nickname, avatar and bio.
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.update_profile(user_id, params).await?.is_none() {
            return Err(BusinessError::UserNotFound.into());
        }

        Ok(())
    }

    /// Changes the password after verifying the current one.
    pub async fn change_password(
        &self,
        user_id: i32,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(BusinessError::UserNotFound.into());
        };

        let matches = bcrypt::verify(old_password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))?;
        if !matches {
            return Err(BusinessError::WrongOldPassword.into());
        }

        let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;
        repo.update_password(user_id, password_hash).await?;

        tracing::info!("user {} changed password", user_id);
        Ok(())
    }
}
