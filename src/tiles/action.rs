//! Tile actions.
//!
//! An action is the effect triggered when a piece lands on a tile. All
//! three kinds relocate the piece; they differ in how their destination
//! was chosen when the action was placed:
//!
//! - `Ladder`: a geometric offset upwards.
//! - `Slide`: a geometric offset downwards.
//! - `Portal`: a uniformly random unoccupied tile.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Result, ValidationError};
use crate::players::Piece;

use super::tile::TileId;

/// Effect executed when a piece lands on a tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileAction {
    /// Climb to a tile higher up the board.
    Ladder { destination: TileId, description: String },

    /// Slide down to a tile lower on the board.
    Slide { destination: TileId, description: String },

    /// Jump to a tile drawn at random when the portal was placed.
    Portal { destination: TileId, description: String },
}

impl TileAction {
    /// Create a ladder action.
    pub fn ladder(destination: TileId, description: impl Into<String>) -> Result<Self> {
        let description = checked_description(description.into())?;
        Ok(Self::Ladder { destination, description })
    }

    /// Create a slide action.
    pub fn slide(destination: TileId, description: impl Into<String>) -> Result<Self> {
        let description = checked_description(description.into())?;
        Ok(Self::Slide { destination, description })
    }

    /// Create a portal action.
    pub fn portal(destination: TileId, description: impl Into<String>) -> Result<Self> {
        let description = checked_description(description.into())?;
        Ok(Self::Portal { destination, description })
    }

    /// Rebuild an action from its record identifier.
    ///
    /// Identifiers are the lower-case kind names returned by [`identifier`].
    ///
    /// [`identifier`]: TileAction::identifier
    pub fn from_identifier(
        identifier: &str,
        destination: TileId,
        description: impl Into<String>,
    ) -> Result<Self> {
        match identifier {
            "ladder" => Self::ladder(destination, description),
            "slide" => Self::slide(destination, description),
            "portal" => Self::portal(destination, description),
            other => Err(ValidationError::new(
                "action.identifier",
                other,
                "one of ladder, slide, portal",
            )
            .into()),
        }
    }

    /// Stable identifier of the action kind.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        match self {
            TileAction::Ladder { .. } => "ladder",
            TileAction::Slide { .. } => "slide",
            TileAction::Portal { .. } => "portal",
        }
    }

    /// Where the action sends the piece.
    #[must_use]
    pub fn destination(&self) -> TileId {
        match self {
            TileAction::Ladder { destination, .. }
            | TileAction::Slide { destination, .. }
            | TileAction::Portal { destination, .. } => *destination,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TileAction::Ladder { description, .. }
            | TileAction::Slide { description, .. }
            | TileAction::Portal { description, .. } => description,
        }
    }

    /// Relocate `piece` to the destination tile.
    ///
    /// Returns the destination. Fails when the destination is not a tile of
    /// `board`; the piece is left untouched in that case.
    pub fn perform<P: Piece + ?Sized>(&self, piece: &mut P, board: &Board) -> Result<TileId> {
        let destination = board.tile(self.destination())?.id();
        piece.relocate(destination);
        Ok(destination)
    }
}

fn checked_description(description: String) -> Result<String> {
    if description.trim().is_empty() {
        return Err(ValidationError::blank("action.description").into());
    }
    Ok(description)
}
