//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod player;
pub mod role;

pub use player::{normalize_tag_line, NewPlayer, Player};
pub use role::Role;
