//! Player database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Player;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_name: String,
    pub tag_line: String,
    pub puuid: Option<String>,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Player {
    fn from(model: Model) -> Self {
        Player {
            id: model.id,
            game_name: model.game_name,
            tag_line: model.tag_line,
            puuid: model.puuid,
            tier: model.tier,
            rank: model.rank,
            league_points: model.league_points,
            wins: model.wins,
            losses: model.losses,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
