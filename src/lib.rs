//! Cosmos Ranking - community leaderboard with an admin session gate
//!
//! Anyone may read the player ranking. Adding or removing players requires
//! an administrator session: the shared admin password is exchanged for a
//! signed, 7-day session token that must accompany every mutation as
//! `Authorization: Bearer <token>`.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Players and roles
//! - **services**: Token codec, credential extraction, login and authorization, player use cases
//! - **infra**: Database, migrations, repositories, game-data provider
//! - **api**: HTTP handlers, the admin session middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Player, Role};
pub use errors::{AppError, AppResult};
