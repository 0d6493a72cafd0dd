//! Issuing and verifying signed identity tokens.
//!
//! Tokens are HS256 JSON Web Tokens binding a user id with a fixed validity window.
//! Verification is stateless: nothing is stored server-side, so a token stays valid until
//! it expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Claims embedded in every identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the user the token was issued to.
    pub user_id: i32,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl TokenService {
    /// Creates a token service signing with `secret`; issued tokens expire after `validity`.
    pub fn new(secret: &str, validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        }
    }

    /// Issues a signed token for `user_id`, valid from now until now + validity.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalErr(TokenExpiryOverflow))` - Expiry is not a representable date
    /// - `Err(AppError::InternalErr(TokenIssue))` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.validity)
            .ok_or(InternalError::TokenExpiryOverflow { user_id })?;

        let claims = Claims {
            user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| InternalError::TokenIssue { user_id, source })?;

        Ok(token)
    }

    /// Verifies a token's signature and expiry and returns the embedded user id.
    ///
    /// Expiry is checked without leeway.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the user the token was issued to
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, expired, or badly signed
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(data.claims.user_id)
    }
}
