//! Application services layer - Use cases and business logic.
//!
//! The auth core lives here: [`TokenCodec`] mints and verifies session
//! tokens, [`extract_bearer`] parses the `Authorization` header, and
//! [`AuthService`] combines them into login and per-request authorization.

mod auth_service;
pub mod container;
mod credentials;
mod player_service;
mod token_codec;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AdminAuthenticator, AuthErrorKind, AuthResult, AuthService};
pub use credentials::extract_bearer;
pub use player_service::{PlayerManager, PlayerService};
pub use token_codec::{Claims, InvalidToken, SessionToken, TokenCodec};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
