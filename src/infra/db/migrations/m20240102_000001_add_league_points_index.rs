//! Migration: Index league points for the ranking query.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_players_table::Players;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_players_league_points")
                    .table(Players::Table)
                    .col(Players::LeaguePoints)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_players_league_points")
                    .table(Players::Table)
                    .to_owned(),
            )
            .await
    }
}
