//! Application configuration module
//!
//! The admin password and token-signing key are read once here and handed
//! to the auth services explicitly; nothing else looks them up.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
