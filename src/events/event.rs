//! Game event types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::players::TokenId;
use crate::tiles::{TileAction, TileId};

/// Something that happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// The dice were thrown. `values` holds each die's face, and is empty
    /// when a supplied total does not match the faces showing.
    DiceRolled {
        player: PlayerId,
        values: SmallVec<[u8; 4]>,
        total: u32,
    },

    /// A ladder-game player moved by the dice total (after any bounce).
    PlayerMoved {
        player: PlayerId,
        from: TileId,
        to: TileId,
        roll: u32,
    },

    /// A token left its start area for the entry tile.
    TokenReleased {
        player: PlayerId,
        token: TokenId,
        tile: TileId,
    },

    /// A released token advanced.
    TokenMoved {
        player: PlayerId,
        token: TokenId,
        from: TileId,
        to: TileId,
        roll: u32,
    },

    /// An opponent's token was sent back to its start area.
    TokenCaptured {
        owner: PlayerId,
        token: TokenId,
        by: PlayerId,
        tile: TileId,
        returned_to: TileId,
    },

    /// A token reached its owner's goal.
    TokenFinished {
        player: PlayerId,
        token: TokenId,
        tile: TileId,
    },

    /// The roll could not be used.
    TurnSkipped { player: PlayerId, roll: u32 },

    /// A tile action relocated a piece.
    ///
    /// `token` is `None` for ladder-game players.
    TileActionPerformed {
        player: PlayerId,
        token: Option<TokenId>,
        tile: TileId,
        action: TileAction,
        destination: TileId,
    },

    /// Play returned to the first player; `round` is the new round number.
    RoundIncremented { round: u32 },

    CurrentPlayerChanged { previous: PlayerId, current: PlayerId },

    /// The first winner of the match.
    GameFinished { winner: PlayerId },
}

impl GameEvent {
    /// The player the event is about, if it concerns a single one.
    ///
    /// Captures report the capturing player.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::DiceRolled { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::TokenReleased { player, .. }
            | GameEvent::TokenMoved { player, .. }
            | GameEvent::TokenFinished { player, .. }
            | GameEvent::TurnSkipped { player, .. }
            | GameEvent::TileActionPerformed { player, .. } => Some(*player),
            GameEvent::TokenCaptured { by, .. } => Some(*by),
            GameEvent::CurrentPlayerChanged { current, .. } => Some(*current),
            GameEvent::GameFinished { winner } => Some(*winner),
            GameEvent::RoundIncremented { .. } => None,
        }
    }

    /// Short kebab-case name of the variant, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::DiceRolled { .. } => "dice-rolled",
            GameEvent::PlayerMoved { .. } => "player-moved",
            GameEvent::TokenReleased { .. } => "token-released",
            GameEvent::TokenMoved { .. } => "token-moved",
            GameEvent::TokenCaptured { .. } => "token-captured",
            GameEvent::TokenFinished { .. } => "token-finished",
            GameEvent::TurnSkipped { .. } => "turn-skipped",
            GameEvent::TileActionPerformed { .. } => "tile-action-performed",
            GameEvent::RoundIncremented { .. } => "round-incremented",
            GameEvent::CurrentPlayerChanged { .. } => "current-player-changed",
            GameEvent::GameFinished { .. } => "game-finished",
        }
    }
}
