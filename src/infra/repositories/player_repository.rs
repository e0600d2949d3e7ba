//! Player repository - persistence for the leaderboard.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::player::{self, ActiveModel, Entity as PlayerEntity};
use crate::domain::{NewPlayer, Player};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Player repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// All players, highest league points first
    async fn list_ranked(&self) -> AppResult<Vec<Player>>;

    /// Find a player by exact game name and tag line
    async fn find_by_name_tag(&self, game_name: &str, tag_line: &str) -> AppResult<Option<Player>>;

    /// Persist a new player
    async fn create(&self, player: NewPlayer) -> AppResult<Player>;

    /// Remove a player permanently, `NotFound` if no row matched
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Check the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of PlayerRepository
pub struct PlayerStore {
    db: DatabaseConnection,
}

impl PlayerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Surface the `(game_name, tag_line)` unique index as a conflict.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Player"),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl PlayerRepository for PlayerStore {
    async fn list_ranked(&self) -> AppResult<Vec<Player>> {
        let models = PlayerEntity::find()
            .order_by_desc(player::Column::LeaguePoints)
            .order_by_asc(player::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Player::from).collect())
    }

    async fn find_by_name_tag(&self, game_name: &str, tag_line: &str) -> AppResult<Option<Player>> {
        let result = PlayerEntity::find()
            .filter(player::Column::GameName.eq(game_name))
            .filter(player::Column::TagLine.eq(tag_line))
            .one(&self.db)
            .await?;

        Ok(result.map(Player::from))
    }

    async fn create(&self, player: NewPlayer) -> AppResult<Player> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            game_name: Set(player.game_name),
            tag_line: Set(player.tag_line),
            puuid: Set(player.puuid),
            tier: Set(player.tier),
            rank: Set(player.rank),
            league_points: Set(player.league_points),
            wins: Set(player.wins),
            losses: Set(player.losses),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        Ok(Player::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = PlayerEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await.map_err(AppError::from)
    }
}
