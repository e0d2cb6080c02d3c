//! Ladder-game rules.
//!
//! Players race from the home tile to the final tile of a linear board.
//! A roll that would pass the final tile bounces back by the surplus, and
//! a tile action on the landing tile fires once.

use tracing::debug;

use crate::board::Board;
use crate::core::config::{validate_player_count, MAX_PLAYERS};
use crate::core::{PlayerId, PlayerMap, Result, ValidationError};
use crate::events::GameEvent;
use crate::players::{LadderPlayer, Piece};
use crate::tiles::TileId;

use super::engine::{BoardGame, Rules};

/// A ladder-game match.
pub type LadderGame = BoardGame<LadderRules>;

/// Movement and win rules of the ladder game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LadderRules;

/// Tile reached from `current` with `roll` on a board of `tile_count` tiles.
///
/// Overshooting the final tile reflects off it; a roll large enough to
/// pass the home tile on the way back reflects again.
///
/// ```
/// use tile_race::game::next_tile;
/// use tile_race::tiles::TileId;
///
/// assert_eq!(next_tile(90, TileId(85), 9), TileId(86));
/// assert_eq!(next_tile(90, TileId(88), 2), TileId(90));
/// ```
#[must_use]
pub fn next_tile(tile_count: u32, current: TileId, roll: u32) -> TileId {
    let count = u64::from(tile_count);
    if count == 0 {
        return current;
    }
    let period = 2 * count;
    let position = (u64::from(current.0) + u64::from(roll)) % period;
    let folded = if position <= count { position } else { period - position };
    TileId(folded as u32)
}

impl Rules for LadderRules {
    type Participant = LadderPlayer;

    fn validate_setup(&self, board: &Board, player_count: usize) -> Result<()> {
        if board.is_cross() {
            return Err(ValidationError::new("board", board.name(), "a linear board").into());
        }
        validate_player_count(player_count, MAX_PLAYERS)
    }

    fn reset(&self, _board: &Board, _seat: PlayerId, participant: &mut LadderPlayer) -> Result<()> {
        participant.reset();
        Ok(())
    }

    fn resolve_move(
        &self,
        board: &Board,
        players: &mut PlayerMap<LadderPlayer>,
        seat: PlayerId,
        roll: u32,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let player = players
            .get_mut(seat)
            .ok_or_else(|| ValidationError::new("player", seat, "a seated player"))?;

        let from = player.current_tile();
        let to = next_tile(board.tile_count(), from, roll);
        player.relocate(to);
        debug!(%seat, from = from.0, to = to.0, roll, "player moved");
        events.push(GameEvent::PlayerMoved {
            player: seat,
            from,
            to,
            roll,
        });

        if let Some(action) = board.tile(to)?.action() {
            let destination = action.perform(player, board)?;
            debug!(
                %seat,
                tile = to.0,
                destination = destination.0,
                kind = action.identifier(),
                "tile action"
            );
            events.push(GameEvent::TileActionPerformed {
                player: seat,
                token: None,
                tile: to,
                action: action.clone(),
                destination,
            });
        }
        Ok(())
    }

    fn has_won(&self, board: &Board, participant: &LadderPlayer) -> bool {
        participant.current_tile() == board.last_tile()
    }
}
