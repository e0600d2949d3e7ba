//! Authentication service - Admin login and per-request session checks.
//!
//! There is one administrative identity guarded by one configured password.
//! Logging in exchanges that password for a signed session token; every
//! privileged request is then checked with [`AuthService::authorize`].

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::credentials::extract_bearer;
use super::token_codec::{Claims, SessionToken, TokenCodec};
use crate::config::{Config, ADMIN_SUBJECT};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

/// Why a request failed authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// No usable `Authorization: Bearer <token>` header
    MissingCredential,
    /// Bad signature, expired, or otherwise undecodable token
    InvalidOrExpired,
}

impl AuthErrorKind {
    /// Client-facing description.
    pub fn message(&self) -> &'static str {
        match self {
            AuthErrorKind::MissingCredential => "Token not provided",
            AuthErrorKind::InvalidOrExpired => "Invalid or expired token",
        }
    }
}

/// Outcome of a single authorization check. Computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Authorized(Claims),
    Rejected(AuthErrorKind),
}

impl AuthResult {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authorized(_))
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            AuthResult::Authorized(claims) => Some(claims),
            AuthResult::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<AuthErrorKind> {
        match self {
            AuthResult::Authorized(_) => None,
            AuthResult::Rejected(kind) => Some(*kind),
        }
    }
}

/// Authentication service trait for dependency injection.
///
/// Both operations are pure computation over the request input, the
/// configured secrets and the wall clock, so neither is async.
pub trait AuthService: Send + Sync {
    /// Exchange the admin password for a session token.
    fn login(&self, submitted_password: &str) -> AppResult<SessionToken>;

    /// Decide whether an `Authorization` header value grants admin access.
    fn authorize(&self, authorization: Option<&str>) -> AuthResult;
}

/// Concrete implementation of AuthService backed by the shared admin password.
#[derive(Clone)]
pub struct AdminAuthenticator {
    codec: TokenCodec,
    password_digest: [u8; 32],
}

impl AdminAuthenticator {
    /// Create the authenticator from startup configuration.
    pub fn new(config: &Config) -> Self {
        let mut password_digest = [0u8; 32];
        password_digest.copy_from_slice(&Sha256::digest(config.admin_password().as_bytes()));

        Self {
            codec: TokenCodec::from_config(config),
            password_digest,
        }
    }

    /// Access the underlying token codec.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Compare fixed-length digests in constant time so neither the content
    /// nor the length of the configured password leaks through timing.
    fn password_matches(&self, submitted: &str) -> bool {
        let digest = Sha256::digest(submitted.as_bytes());
        bool::from(digest.as_slice().ct_eq(self.password_digest.as_slice()))
    }
}

impl AuthService for AdminAuthenticator {
    fn login(&self, submitted_password: &str) -> AppResult<SessionToken> {
        if submitted_password.is_empty() {
            return Err(AppError::MissingSecret);
        }

        if !self.password_matches(submitted_password) {
            tracing::warn!("Admin login failed: incorrect password");
            return Err(AppError::WrongSecret);
        }

        let session = self.codec.issue(ADMIN_SUBJECT, Role::Admin)?;
        tracing::info!(subject = %session.claims.sub, "Admin login succeeded");

        Ok(session)
    }

    fn authorize(&self, authorization: Option<&str>) -> AuthResult {
        let Some(token) = extract_bearer(authorization) else {
            return AuthResult::Rejected(AuthErrorKind::MissingCredential);
        };

        match self.codec.verify(token) {
            Ok(claims) => AuthResult::Authorized(claims),
            Err(_) => AuthResult::Rejected(AuthErrorKind::InvalidOrExpired),
        }
    }
}
