//! Migration: Create players table.

use sea_orm_migration::prelude::*;

use crate::config::DEFAULT_TIER;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Players::GameName).string().not_null())
                    .col(ColumnDef::new(Players::TagLine).string().not_null())
                    .col(ColumnDef::new(Players::Puuid).string().null())
                    .col(
                        ColumnDef::new(Players::Tier)
                            .string()
                            .not_null()
                            .default(DEFAULT_TIER),
                    )
                    .col(ColumnDef::new(Players::Rank).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Players::LeaguePoints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Players::Wins).integer().not_null().default(0))
                    .col(ColumnDef::new(Players::Losses).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per Riot ID
        manager
            .create_index(
                Index::create()
                    .name("idx_players_game_name_tag_line")
                    .table(Players::Table)
                    .col(Players::GameName)
                    .col(Players::TagLine)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Players {
    Table,
    Id,
    GameName,
    TagLine,
    Puuid,
    Tier,
    Rank,
    LeaguePoints,
    Wins,
    Losses,
    CreatedAt,
    UpdatedAt,
}
