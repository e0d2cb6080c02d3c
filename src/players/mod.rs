//! Participants and their pieces.
//!
//! - [`PlayerProfile`]: who is playing (name, colour, bot flag)
//! - [`LadderPlayer`]: a ladder-game participant with a single position
//! - [`LudoPlayer`]: a Ludo participant owning four [`Token`]s
//!
//! Positions are tile ids into the shared board, never copies of tiles.

mod ladder;
mod ludo;
mod profile;

pub use ladder::LadderPlayer;
pub use ludo::{LudoPlayer, Token, TokenId, TokenStatus};
pub use profile::{PlayerProfile, TokenType};

use crate::tiles::TileId;

/// Anything that occupies a tile and can be relocated by a tile action.
pub trait Piece {
    /// The tile the piece stands on.
    fn tile(&self) -> TileId;

    /// Move the piece to `tile` without any rule checks.
    fn relocate(&mut self, tile: TileId);
}
