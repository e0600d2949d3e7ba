//! Player service - Leaderboard membership use cases.
//!
//! Authorization is enforced before these methods are reached; the service
//! itself only deals with players.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{normalize_tag_line, NewPlayer, Player};
use crate::errors::{AppError, AppResult};
use crate::infra::{GameDataProvider, PlayerRepository, RiotAccount};

/// Player service trait for dependency injection.
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Public ranking, highest league points first
    async fn list_players(&self) -> AppResult<Vec<Player>>;

    /// Register a player by Riot ID
    async fn add_player(&self, game_name: String, tag_line: String) -> AppResult<Player>;

    /// Remove a player from the ranking
    async fn delete_player(&self, id: i32) -> AppResult<()>;

    /// Whether game data comes from the canned provider
    fn mock_mode(&self) -> bool;

    /// Check the player store is reachable
    async fn health_check(&self) -> AppResult<()>;
}

/// Concrete implementation of PlayerService.
pub struct PlayerManager {
    players: Arc<dyn PlayerRepository>,
    game_data: Arc<dyn GameDataProvider>,
}

impl PlayerManager {
    pub fn new(players: Arc<dyn PlayerRepository>, game_data: Arc<dyn GameDataProvider>) -> Self {
        Self { players, game_data }
    }
}

#[async_trait]
impl PlayerService for PlayerManager {
    async fn list_players(&self) -> AppResult<Vec<Player>> {
        self.players.list_ranked().await
    }

    async fn add_player(&self, game_name: String, tag_line: String) -> AppResult<Player> {
        let tag_line = normalize_tag_line(&tag_line);

        if self
            .players
            .find_by_name_tag(&game_name, &tag_line)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Player"));
        }

        // Register with the submitted Riot ID if the provider is unavailable
        let account = match self.game_data.account_by_riot_id(&game_name, &tag_line).await {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!(
                    game_name = %game_name,
                    tag_line = %tag_line,
                    error = %e,
                    "Game data lookup failed, registering with minimal data"
                );
                RiotAccount {
                    puuid: None,
                    game_name: game_name.clone(),
                    tag_line: tag_line.clone(),
                }
            }
        };

        let game_name = non_empty_or(account.game_name, game_name);
        let tag_line = non_empty_or(account.tag_line, tag_line);

        self.players
            .create(NewPlayer::unranked(game_name, tag_line, account.puuid))
            .await
    }

    async fn delete_player(&self, id: i32) -> AppResult<()> {
        self.players.delete(id).await
    }

    fn mock_mode(&self) -> bool {
        self.game_data.is_mock()
    }

    async fn health_check(&self) -> AppResult<()> {
        self.players.ping().await
    }
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
