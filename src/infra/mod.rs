//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Player repository
//! - Game-data provider

pub mod db;
pub mod game_data;
pub mod repositories;

pub use db::{Database, Migrator};
pub use game_data::{CannedGameData, GameDataProvider, RiotAccount};
pub use repositories::{PlayerRepository, PlayerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use game_data::MockGameDataProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockPlayerRepository;
