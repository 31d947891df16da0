//! Authentication service: registration, login, token refresh.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    data::{is_unique_violation, user::UserRepository},
    dto::auth::RegisterRequest,
    error::{auth::AuthError, business::BusinessError, AppError},
    model::user::{role_name, CreateUserParams, User},
    service::auth::token::TokenProvider,
};
use entity::user::{Role, UserStatus};

/// Avatar assigned to accounts that have not uploaded one.
const DEFAULT_AVATAR: &str =
    "https://cube.elemecdn.com/0/88/03b0d39583f48206768a7534e55bcpng.png";

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub password: String,
    pub email: String,
    pub nickname: Option<String>,
}

impl From<RegisterRequest> for RegisterParams {
    fn from(dto: RegisterRequest) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            email: dto.email,
            nickname: dto.nickname,
        }
    }
}

/// Successful login or refresh: both tokens plus the user's profile.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenProvider,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenProvider) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account with the User role.
    ///
    /// Username and email are probed first for the friendly error message;
    /// the unique constraints on both columns close the remaining race, and a
    /// constraint violation on insert is reported the same way as the probe.
    ///
    /// # Returns
    /// - `Ok(())` - Account created
    /// - `Err(BusinessError::UsernameTaken / EmailTaken)` - Duplicate identity
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterParams) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.username_exists(&params.username).await? {
            return Err(BusinessError::UsernameTaken.into());
        }
        if repo.email_exists(&params.email).await? {
            return Err(BusinessError::EmailTaken.into());
        }

        let password_hash = bcrypt::hash(&params.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        let nickname = params
            .nickname
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| params.username.clone());

        let created = repo
            .create(CreateUserParams {
                username: params.username,
                password_hash,
                email: params.email,
                nickname,
                avatar: DEFAULT_AVATAR.to_string(),
                role: Role::User,
                status: UserStatus::Normal,
            })
            .await;

        match created {
            Ok(user) => {
                tracing::info!("user {} registered", user.username);
                Ok(())
            }
            // Lost the race against a concurrent registration with the same
            // username or email.
            Err(err) if is_unique_violation(&err) => Err(BusinessError::UsernameTaken.into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Authenticates a user and issues both tokens.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// endpoint does not reveal which accounts exist.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Credentials valid, account active
    /// - `Err(BusinessError::BadCredentials)` - Unknown user or wrong password
    /// - `Err(BusinessError::AccountDisabled)` - Valid credentials, disabled account
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(username).await? else {
            return Err(BusinessError::BadCredentials.into());
        };

        let password_matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))?;
        if !password_matches {
            return Err(BusinessError::BadCredentials.into());
        }

        if user.status == UserStatus::Disabled {
            return Err(BusinessError::AccountDisabled.into());
        }

        repo.touch_last_login(user.id).await?;

        let role = role_name(&user.role);
        let access_token = self
            .tokens
            .issue_access_token(user.id, &user.username, role)?;
        let refresh_token = self
            .tokens
            .issue_refresh_token(user.id, &user.username, role)?;

        tracing::info!("user {} logged in", user.username);

        Ok(LoginResult {
            access_token,
            refresh_token,
            user: User::from_entity(user),
        })
    }

    /// Re-issues an access token from a valid refresh token.
    ///
    /// The refresh token must validate and the referenced user must still
    /// exist; a token surviving its account is refused. The refresh token
    /// itself is returned unchanged for continued use.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Fresh access token plus current profile
    /// - `Err(AuthError::InvalidRefreshToken)` - Bad signature or expired
    /// - `Err(AuthError::UserGone)` - Referenced user was deleted
    pub async fn refresh(&self, refresh_token: &str) -> Result<LoginResult, AppError> {
        let claims = self
            .tokens
            .decode(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let repo = UserRepository::new(self.db);
        let Some(user) = repo.find_by_id(claims.user_id).await? else {
            return Err(AuthError::UserGone(claims.user_id).into());
        };

        // Claims may be stale; issue the new token from the current record.
        let access_token =
            self.tokens
                .issue_access_token(user.id, &user.username, role_name(&user.role))?;

        Ok(LoginResult {
            access_token,
            refresh_token: refresh_token.to_string(),
            user: User::from_entity(user),
        })
    }
}
