//! Service Container - Centralized service access.
//!
//! Wires concrete services from configuration and a database connection,
//! and exposes them through their traits.

use std::sync::Arc;

use super::{AdminAuthenticator, AuthService, PlayerManager, PlayerService};
use crate::config::Config;
use crate::infra::{CannedGameData, PlayerStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get player service
    fn players(&self) -> Arc<dyn PlayerService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    player_service: Arc<dyn PlayerService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(auth_service: Arc<dyn AuthService>, player_service: Arc<dyn PlayerService>) -> Self {
        Self {
            auth_service,
            player_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let auth_service = Arc::new(AdminAuthenticator::new(config));
        let player_service = Arc::new(PlayerManager::new(
            Arc::new(PlayerStore::new(db)),
            Arc::new(CannedGameData),
        ));

        Self {
            auth_service,
            player_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn players(&self) -> Arc<dyn PlayerService> {
        self.player_service.clone()
    }
}
