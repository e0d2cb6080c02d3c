//! Ludo rules.
//!
//! Seat `i` plays arm `i` of a cross board. Each turn moves at most one
//! token:
//!
//! - Nothing on the board: a release roll puts the lowest waiting token on
//!   the entry tile, anything else forfeits the turn.
//! - Otherwise the lowest released token advances. It leaves the shared
//!   track at its arm's turn tile; the goal is terminal and surplus steps
//!   are lost.
//!
//! Landing (or being released) on opponents' released tokens sends every
//! one of them back to its start slot.

use tracing::debug;

use crate::board::{ArmLayout, Board, CrossLayout};
use crate::core::config::{validate_player_count, CROSS_ARMS, RELEASE_ROLL};
use crate::core::{GameError, PlayerId, PlayerMap, Result, ValidationError};
use crate::events::GameEvent;
use crate::players::{LudoPlayer, Piece, TokenId, TokenStatus};
use crate::tiles::TileId;

use super::engine::{BoardGame, Rules};

/// A Ludo match.
pub type LudoGame = BoardGame<LudoRules>;

/// Release, movement, capture and win rules of Ludo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LudoRules;

impl LudoRules {
    fn layout(board: &Board) -> Result<&CrossLayout> {
        board
            .cross_layout()
            .ok_or_else(|| ValidationError::new("board", board.name(), "a cross board").into())
    }

    fn arm(layout: &CrossLayout, seat: PlayerId) -> Result<&ArmLayout> {
        layout
            .arm(seat.index())
            .ok_or_else(|| GameError::topology(format!("no arm for {}", seat)))
    }

    fn release(
        arm: &ArmLayout,
        player: &mut LudoPlayer,
        seat: PlayerId,
        roll: u32,
        events: &mut Vec<GameEvent>,
    ) -> Option<TileId> {
        let waiting = player.first_waiting().filter(|_| roll == RELEASE_ROLL);
        let Some(token) = waiting.and_then(|id| player.token_mut(id)) else {
            debug!(%seat, roll, "turn skipped");
            events.push(GameEvent::TurnSkipped { player: seat, roll });
            return None;
        };

        token.set_status(TokenStatus::Released);
        token.relocate(arm.entry);
        debug!(%seat, token = %token.id(), tile = arm.entry.0, "token released");
        events.push(GameEvent::TokenReleased {
            player: seat,
            token: token.id(),
            tile: arm.entry,
        });
        Some(arm.entry)
    }

    fn advance(
        board: &Board,
        arm: &ArmLayout,
        player: &mut LudoPlayer,
        seat: PlayerId,
        id: TokenId,
        roll: u32,
        events: &mut Vec<GameEvent>,
    ) -> Result<Option<TileId>> {
        let token = player
            .token_mut(id)
            .ok_or_else(|| ValidationError::new("token", id, "a token of the current player"))?;

        let from = token.current_tile();
        let mut at = from;
        for _ in 0..roll {
            match arm.step(board.tile(at)?) {
                Some(next) => at = next,
                None => break,
            }
        }

        token.relocate(at);
        debug!(%seat, token = %id, from = from.0, to = at.0, roll, "token moved");
        events.push(GameEvent::TokenMoved {
            player: seat,
            token: id,
            from,
            to: at,
            roll,
        });

        if at == arm.goal {
            token.set_status(TokenStatus::Finished);
            events.push(GameEvent::TokenFinished {
                player: seat,
                token: id,
                tile: at,
            });
            return Ok(None);
        }
        Ok(Some(at))
    }

    fn capture(
        layout: &CrossLayout,
        players: &mut PlayerMap<LudoPlayer>,
        by: PlayerId,
        tile: TileId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        for (owner, player) in players.iter_mut() {
            if owner == by {
                continue;
            }
            let arm = Self::arm(layout, owner)?;
            for token in player.tokens_mut() {
                if !token.is_released() || token.current_tile() != tile {
                    continue;
                }
                token.send_home(arm);
                debug!(%owner, token = %token.id(), %by, tile = tile.0, "token captured");
                events.push(GameEvent::TokenCaptured {
                    owner,
                    token: token.id(),
                    by,
                    tile,
                    returned_to: token.current_tile(),
                });
            }
        }
        Ok(())
    }
}

impl Rules for LudoRules {
    type Participant = LudoPlayer;

    fn validate_setup(&self, board: &Board, player_count: usize) -> Result<()> {
        Self::layout(board)?;
        validate_player_count(player_count, CROSS_ARMS)
    }

    fn reset(&self, board: &Board, seat: PlayerId, participant: &mut LudoPlayer) -> Result<()> {
        let arm = Self::arm(Self::layout(board)?, seat)?;
        participant.reset(arm);
        Ok(())
    }

    fn resolve_move(
        &self,
        board: &Board,
        players: &mut PlayerMap<LudoPlayer>,
        seat: PlayerId,
        roll: u32,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let layout = Self::layout(board)?;
        let arm = Self::arm(layout, seat)?;
        let player = players
            .get_mut(seat)
            .ok_or_else(|| ValidationError::new("player", seat, "a seated player"))?;

        let landed = match player.first_released() {
            Some(id) => Self::advance(board, arm, player, seat, id, roll, events)?,
            None => Self::release(arm, player, seat, roll, events),
        };

        if let Some(tile) = landed {
            Self::capture(layout, players, seat, tile, events)?;
        }
        Ok(())
    }

    fn has_won(&self, _board: &Board, participant: &LudoPlayer) -> bool {
        participant.all_finished()
    }
}
