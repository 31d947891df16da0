//! Stateless JWT authentication for request handlers.
//!
//! `AuthUser` is the extractor protected routes use: it pulls the bearer token
//! from the `Authorization` header, validates it through the shared
//! `TokenProvider`, and hands the handler an authenticated `Principal`. No
//! session store and no database lookup are involved; everything a handler
//! needs to authorize the request is in the validated claims.
//!
//! Routes that personalize but stay public use `MaybeAuthUser`, which yields
//! `None` instead of rejecting when the token is missing or invalid.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::{
    error::{auth::AuthError, AppError},
    model::user::role_from_name,
    service::auth::token::Claims,
    state::AppState,
};
use entity::user::Role;

/// Scheme prefix expected in the `Authorization` header.
pub const TOKEN_PREFIX: &str = "Bearer ";

/// The authenticated identity attached to a request.
///
/// Built from validated token claims, not from the database, so it reflects
/// the user's identity at token issuance time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

impl Principal {
    /// Maps validated claims to a principal.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Claims carried a known role
    /// - `Err(AuthError::InvalidClaims)` - Unknown role value; the token is
    ///   refused rather than downgraded
    pub fn from_claims(claims: Claims) -> Result<Self, AuthError> {
        let role = role_from_name(&claims.role)
            .ok_or_else(|| AuthError::InvalidClaims(format!("unknown role '{}'", claims.role)))?;

        Ok(Self {
            user_id: claims.user_id,
            username: claims.username,
            role,
        })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Permissions a route can demand beyond plain authentication.
pub enum Permission {
    Admin,
}

/// Role-based access check over an authenticated principal.
pub struct AuthGuard<'a> {
    principal: &'a Principal,
}

impl<'a> AuthGuard<'a> {
    pub fn new(principal: &'a Principal) -> Self {
        Self { principal }
    }

    /// Requires every listed permission, failing on the first one missing.
    ///
    /// # Returns
    /// - `Ok(())` - All permissions held
    /// - `Err(AuthError::AccessDenied)` - A permission check failed (403)
    pub fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.principal.is_admin() {
                        return Err(AuthError::AccessDenied {
                            user_id: self.principal.user_id,
                            message: "admin role required".to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(())
    }
}

/// Extractor for routes that require authentication.
///
/// Rejects with 401 before the handler body runs when the token is missing,
/// malformed, expired or carries unusable claims.
pub struct AuthUser(pub Principal);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;
        let claims = state.tokens.decode(token)?;

        Ok(AuthUser(Principal::from_claims(claims)?))
    }
}

/// Extractor for public routes that personalize when a valid token is present.
///
/// Never rejects: a missing or invalid token simply yields an anonymous
/// request.
pub struct MaybeAuthUser(pub Option<Principal>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = bearer_token(&parts.headers)
            .and_then(|token| state.tokens.decode(token).ok())
            .and_then(|claims| Principal::from_claims(claims).ok());

        Ok(MaybeAuthUser(principal))
    }
}

/// Extracts the bearer token from the `Authorization` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(TOKEN_PREFIX)
}
