//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::{Role, UserStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Bcrypt cost used for factory passwords. The minimum cost keeps test suites
/// fast; production hashing uses the default cost.
const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("writer")
///     .password("secret")
///     .role(entity::user::Role::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
    email: String,
    nickname: Option<String>,
    role: Role,
    status: UserStatus,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - password: `"password"`
    /// - email: `"user_{id}@example.com"`
    /// - nickname: same as username
    /// - role: `Role::User`
    /// - status: `UserStatus::Normal`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            password: "password".to_string(),
            email: format!("user_{}@example.com", id),
            nickname: None,
            role: Role::User,
            status: UserStatus::Normal,
        }
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the plaintext password; it is bcrypt-hashed at build time.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the email address for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display nickname for the user.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Sets the role for the user.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the account status for the user.
    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or password hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(format!("Failed to hash factory password: {}", e)))?;
        let nickname = self.nickname.unwrap_or_else(|| self.username.clone());
        let now = Utc::now();

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(password_hash),
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(nickname),
            avatar: ActiveValue::Set("https://example.com/avatar.png".to_string()),
            bio: ActiveValue::Set(None),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            email_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the Admin role.
///
/// Shorthand for `UserFactory::new(db).role(Role::Admin).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created admin user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(Role::Admin).build().await
}
