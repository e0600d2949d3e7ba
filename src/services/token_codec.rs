//! Signed, time-limited session tokens.
//!
//! Tokens are HS256 JWTs. They are self-contained: validity depends only on
//! the signature and the `exp` claim, so there is no server-side session
//! store and no revocation before expiry.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::{Config, SESSION_TTL_SECONDS};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Authenticated identity
    #[schema(example = "admin")]
    pub sub: String,
    pub role: Role,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// A freshly minted token together with the claims it encodes.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub claims: Claims,
}

/// Verification failure. Bad signature, expiry and malformed input all
/// collapse into this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid or expired session token")]
pub struct InvalidToken;

/// Issues and verifies session tokens with the process-wide signing key.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec from raw signing key bytes.
    pub fn new(signing_key: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            validation,
        }
    }

    /// Create a codec using the configured signing key.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes())
    }

    /// Issue a token for `subject` valid for seven days from now.
    pub fn issue(&self, subject: &str, role: Role) -> AppResult<SessionToken> {
        self.issue_at(subject, role, Utc::now())
    }

    /// Issue a token as if it had been minted at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> AppResult<SessionToken> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat,
            exp: iat + SESSION_TTL_SECONDS,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {}", e)))?;

        Ok(SessionToken { token, claims })
    }

    /// Verify signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, InvalidToken> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(kind = ?e.kind(), "Session token rejected");
            InvalidToken
        })?;

        // `exp` must lie strictly in the future
        if data.claims.exp <= Utc::now().timestamp() {
            tracing::debug!("Session token rejected at expiry boundary");
            return Err(InvalidToken);
        }

        Ok(data.claims)
    }
}
