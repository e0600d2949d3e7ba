//! API middleware.

mod auth;

pub use auth::{admin_session_middleware, CurrentAdmin};
