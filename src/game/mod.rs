//! The turn engine.
//!
//! [`BoardGame`] owns the turn skeleton shared by both variants: roll the
//! dice, let the [`Rules`] move pieces, check for a winner, advance the
//! round and the current player, and publish the events. The variant rules
//! live in [`LadderRules`] and [`LudoRules`].
//!
//! ## State machine
//!
//! ```text
//! Idle -> TurnInProgress -> WinCheck -> Idle(next player)
//!                                    -> Finished (first winner)
//! ```
//!
//! `Finished` is absorbing for the winner but turns are still accepted.

mod engine;
mod ladder;
mod ludo;

pub use engine::{BoardGame, Rules, TurnReport};
pub use ladder::{next_tile, LadderGame, LadderRules};
pub use ludo::{LudoGame, LudoRules};
