//! Player domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::DEFAULT_TIER;

/// Registered leaderboard player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Rei da Baixada")]
    pub game_name: String,
    #[schema(example = "MEC")]
    pub tag_line: String,
    pub puuid: Option<String>,
    #[schema(example = "DIAMOND")]
    pub tier: String,
    #[schema(example = "I")]
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to persist a new player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: Option<String>,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
}

impl NewPlayer {
    /// A freshly registered player with no ranked data yet.
    pub fn unranked(game_name: String, tag_line: String, puuid: Option<String>) -> Self {
        Self {
            game_name,
            tag_line,
            puuid,
            tier: DEFAULT_TIER.to_string(),
            rank: String::new(),
            league_points: 0,
            wins: 0,
            losses: 0,
        }
    }
}

/// Strip the first `#` from a Riot tag line (`#BR1` and `BR1` name the same tag).
pub fn normalize_tag_line(tag_line: &str) -> String {
    tag_line.replacen('#', "", 1)
}
