//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_DATABASE_URL, DEFAULT_JWT_SECRET, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration.
///
/// Built once at startup and shared read-only afterwards. Both secrets are
/// private so they can only be consumed through the accessors below.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    admin_password: String,
    jwt_secret: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("admin_password", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Missing secrets fall back to insecure development defaults with a
    /// warning. A signing key shorter than [`MIN_JWT_SECRET_LENGTH`] bytes or
    /// an empty admin password is rejected.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_PASSWORD not set, using insecure default for development");
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using insecure default for development");
            DEFAULT_JWT_SECRET.to_string()
        });

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            admin_password,
            jwt_secret,
        };
        config.validate()?;

        Ok(config)
    }

    /// Build a configuration from explicit secrets, without reading the environment.
    pub fn with_secrets(admin_password: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            admin_password: admin_password.into(),
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Override the database URL.
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    /// Check the secrets satisfy the minimum security requirements.
    pub fn validate(&self) -> AppResult<()> {
        if self.admin_password.is_empty() {
            return Err(AppError::validation("ADMIN_PASSWORD must not be empty"));
        }

        if self.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::validation(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(())
    }

    /// Get the configured admin password.
    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}
