//! HS256 access tokens.
//!
//! Expiry is checked here rather than by `jsonwebtoken` so the boundary is
//! exact: a token is valid while `now < exp` with no leeway.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::types::error::AppError;
use crate::types::token::Claims;

/// Signing-key holder, built once from config and shared read-only.
pub struct TokenAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime_secs: i64,
}

impl TokenAuth {
    pub fn new(secret: &[u8], lifetime_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            lifetime_secs,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.as_bytes(), config.expires_in)
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    pub fn issue_at(&self, user_id: Uuid, issued_at: i64) -> Result<String, AppError> {
        let exp = issued_at
            .checked_add(self.lifetime_secs)
            .ok_or_else(|| AppError::Internal("token lifetime out of range".into()))?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at,
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    pub fn verify(&self, raw: &str) -> Result<Claims, AppError> {
        self.verify_at(raw, Utc::now().timestamp())
    }

    pub fn verify_at(&self, raw: &str, now: i64) -> Result<Claims, AppError> {
        let data = decode::<Claims>(raw, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Rejected token");
            AppError::Unauthorized
        })?;
        let claims = data.claims;
        if now >= claims.exp {
            tracing::debug!(sub = %claims.sub, exp = claims.exp, "Rejected expired token");
            return Err(AppError::Unauthorized);
        }
        claims.user_id()?;
        Ok(claims)
    }
}
