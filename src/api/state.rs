//! Application state - Dependency injection container.
//!
//! Handlers and middleware reach services only through the trait objects
//! held here, so tests can swap any of them out.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AuthService, PlayerService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Admin authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Player leaderboard service
    pub player_service: Arc<dyn PlayerService>,
}

impl AppState {
    /// Create application state from a connected database and config.
    pub fn from_config(database: &Database, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            auth_service: container.auth(),
            player_service: container.players(),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(auth_service: Arc<dyn AuthService>, player_service: Arc<dyn PlayerService>) -> Self {
        Self {
            auth_service,
            player_service,
        }
    }
}
