//! Ladder-game participant.

use serde::{Deserialize, Serialize};

use crate::tiles::TileId;

use super::profile::{PlayerProfile, TokenType};
use super::Piece;

/// A ladder-game player: a profile, a piece shape and one position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderPlayer {
    profile: PlayerProfile,
    token_type: TokenType,
    tile: TileId,
}

impl LadderPlayer {
    /// A player waiting on the home tile.
    pub fn new(profile: PlayerProfile, token_type: TokenType) -> Self {
        Self {
            profile,
            token_type,
            tile: TileId::HOME,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    #[must_use]
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Current tile.
    #[must_use]
    pub fn current_tile(&self) -> TileId {
        self.tile
    }

    /// Send the player back to the home tile.
    pub fn reset(&mut self) {
        self.tile = TileId::HOME;
    }
}

impl Piece for LadderPlayer {
    fn tile(&self) -> TileId {
        self.tile
    }

    fn relocate(&mut self, tile: TileId) {
        self.tile = tile;
    }
}
