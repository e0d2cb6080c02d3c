//! Player records.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameError, Result};
use crate::players::{LadderPlayer, LudoPlayer, PlayerProfile, TokenType};

/// A ladder-game player as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderPlayerRecord {
    pub name: String,
    /// `#RRGGBB`.
    pub color_hex: String,
    #[serde(default)]
    pub token_type: TokenType,
    #[serde(default)]
    pub is_bot: bool,
}

impl From<&LadderPlayer> for LadderPlayerRecord {
    fn from(player: &LadderPlayer) -> Self {
        let profile = player.profile();
        Self {
            name: profile.name().to_string(),
            color_hex: profile.color().to_hex(),
            token_type: player.token_type(),
            is_bot: profile.is_bot(),
        }
    }
}

impl TryFrom<LadderPlayerRecord> for LadderPlayer {
    type Error = GameError;

    fn try_from(record: LadderPlayerRecord) -> Result<Self> {
        let color = Color::from_hex(&record.color_hex)?;
        let profile = PlayerProfile::new(record.name, color, record.is_bot)?;
        Ok(LadderPlayer::new(profile, record.token_type))
    }
}

/// A Ludo player as stored. Token positions are match state, not identity,
/// and are not recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LudoPlayerRecord {
    pub name: String,
    pub color_hex: String,
    #[serde(default)]
    pub is_bot: bool,
}

impl From<&LudoPlayer> for LudoPlayerRecord {
    fn from(player: &LudoPlayer) -> Self {
        let profile = player.profile();
        Self {
            name: profile.name().to_string(),
            color_hex: profile.color().to_hex(),
            is_bot: profile.is_bot(),
        }
    }
}

impl TryFrom<LudoPlayerRecord> for LudoPlayer {
    type Error = GameError;

    fn try_from(record: LudoPlayerRecord) -> Result<Self> {
        let color = Color::from_hex(&record.color_hex)?;
        Ok(LudoPlayer::new(PlayerProfile::new(record.name, color, record.is_bot)?))
    }
}
