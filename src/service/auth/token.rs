//! Stateless JWT issuance and validation.
//!
//! Tokens are HMAC-SHA256 signed and carry the user's id, username and role as
//! claims, so protected routes never need a database round trip to establish
//! the caller's identity. Access and refresh tokens share the same claim shape
//! and differ only in lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::auth::AuthError;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Id of the authenticated user.
    pub user_id: i32,
    /// Username at issuance time.
    pub username: String,
    /// Role wire name (`USER` / `ADMIN`) at issuance time.
    pub role: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch. Validated on decode.
    pub exp: i64,
}

/// Issues and validates the application's bearer tokens.
///
/// Cheap to clone: the keys are reference-counted internally, so the provider
/// lives in `AppState` and is cloned per request with the rest of the state.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenProvider {
    /// Creates a provider from the shared HMAC secret and token lifetimes.
    ///
    /// # Arguments
    /// - `secret` - HMAC signing secret bytes
    /// - `access_ttl_secs` - Access token lifetime in seconds
    /// - `refresh_ttl_secs` - Refresh token lifetime in seconds
    pub fn new(secret: &[u8], access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl: Duration::seconds(access_ttl_secs),
            refresh_ttl: Duration::seconds(refresh_ttl_secs),
        }
    }

    /// Issues a short-lived access token.
    pub fn issue_access_token(
        &self,
        user_id: i32,
        username: &str,
        role: &str,
    ) -> Result<String, AuthError> {
        self.sign(user_id, username, role, self.access_ttl)
    }

    /// Issues a long-lived refresh token.
    pub fn issue_refresh_token(
        &self,
        user_id: i32,
        username: &str,
        role: &str,
    ) -> Result<String, AuthError> {
        self.sign(user_id, username, role, self.refresh_ttl)
    }

    fn sign(
        &self,
        user_id: i32,
        username: &str,
        role: &str,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            username: username.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Validates signature and expiry, returning the embedded claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed token or
    ///   past expiry
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> TokenProvider {
        TokenProvider::new(b"test-secret-for-token-tests", 900, 604800)
    }

    #[test]
    fn decode_roundtrips_claims() {
        let tokens = provider();

        let token = tokens.issue_access_token(42, "writer", "USER").unwrap();
        let claims = tokens.decode(&token).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "writer");
        assert_eq!(claims.role, "USER");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_expired_token() {
        // Negative TTL puts the expiry well beyond the default decode leeway.
        let tokens = TokenProvider::new(b"test-secret-for-token-tests", -300, -300);

        let token = tokens.issue_access_token(1, "writer", "USER").unwrap();
        let result = tokens.decode(&token);

        assert!(result.is_err());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let theirs = TokenProvider::new(b"a-completely-different-secret", 900, 900);
        let ours = provider();

        let token = theirs.issue_access_token(1, "writer", "ADMIN").unwrap();
        let result = ours.decode(&token);

        assert!(result.is_err());
    }

    #[test]
    fn rejects_tampered_token() {
        let tokens = provider();

        let mut token = tokens.issue_access_token(7, "writer", "USER").unwrap();
        token.pop();
        let result = tokens.decode(&token);

        assert!(result.is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(provider().decode("not-a-jwt").is_err());
    }

    #[test]
    fn refresh_token_outlives_access_token() {
        let tokens = provider();

        let access = tokens.issue_access_token(1, "writer", "USER").unwrap();
        let refresh = tokens.issue_refresh_token(1, "writer", "USER").unwrap();

        let access_exp = tokens.decode(&access).unwrap().exp;
        let refresh_exp = tokens.decode(&refresh).unwrap().exp;
        assert!(refresh_exp > access_exp);
    }
}
