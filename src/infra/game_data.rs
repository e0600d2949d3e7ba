//! Game-data provider seam.
//!
//! Player registration asks a provider to resolve a Riot ID into account
//! data. Only the canned provider used when no live API key is configured
//! ships here; a live client would implement the same trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const CANNED_PUUID: &str = "MOCK-PUUID-001";
const CANNED_GAME_NAME: &str = "Rei da Baixada";
const CANNED_TAG_LINE: &str = "MEC";

/// Account data resolved from a Riot ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiotAccount {
    pub puuid: Option<String>,
    pub game_name: String,
    pub tag_line: String,
}

/// Source of player account data.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GameDataProvider: Send + Sync {
    /// Resolve a Riot ID (`game_name#tag_line`) into account data
    async fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> AppResult<RiotAccount>;

    /// Whether responses are canned rather than fetched live
    fn is_mock(&self) -> bool;
}

/// Provider returning canned account data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedGameData;

#[async_trait]
impl GameDataProvider for CannedGameData {
    async fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> AppResult<RiotAccount> {
        let tag_line = tag_line.strip_prefix('#').unwrap_or(tag_line);

        if game_name.eq_ignore_ascii_case(CANNED_GAME_NAME)
            && tag_line.eq_ignore_ascii_case(CANNED_TAG_LINE)
        {
            return Ok(RiotAccount {
                puuid: Some(CANNED_PUUID.to_string()),
                game_name: CANNED_GAME_NAME.to_string(),
                tag_line: CANNED_TAG_LINE.to_string(),
            });
        }

        Ok(RiotAccount {
            puuid: Some(CANNED_PUUID.to_string()),
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }

    fn is_mock(&self) -> bool {
        true
    }
}
