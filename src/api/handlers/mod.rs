//! HTTP request handlers.

pub mod auth_handler;
pub mod player_handler;

pub use auth_handler::auth_routes;
pub use player_handler::player_routes;
