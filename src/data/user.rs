//! User data repository for database operations.
//!
//! Handles account creation, credential lookups, profile updates and the
//! uniqueness probes used during registration. Password hashes never leave
//! this layer except through `find_*` calls made by the auth service for
//! verification.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::user::{CreateUserParams, UpdateProfileParams};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// The username and email columns carry unique constraints, so a
    /// concurrent duplicate registration surfaces here as a constraint
    /// violation rather than slipping past the service-level existence check.
    ///
    /// # Arguments
    /// - `params` - Profile fields and the already-hashed password
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            email: ActiveValue::Set(params.email),
            nickname: ActiveValue::Set(params.nickname),
            avatar: ActiveValue::Set(params.avatar),
            bio: ActiveValue::Set(None),
            role: ActiveValue::Set(params.role),
            status: ActiveValue::Set(params.status),
            email_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by their unique username. Used by login.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Stamps the user's last login time with the current UTC timestamp.
    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::LastLoginAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Applies a partial profile update, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during fetch or update
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        if let Some(nickname) = params.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(avatar) = params.avatar {
            active.avatar = ActiveValue::Set(avatar);
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Replaces the stored password hash.
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
