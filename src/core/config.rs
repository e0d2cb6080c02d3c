//! Engine configuration and game limits.
//!
//! Collaborators configure an engine by providing a [`GameConfig`]:
//! how many dice are thrown each turn and, optionally, a seed so the
//! match can be replayed. Board and player limits live here as constants
//! so every constructor validates against the same numbers.

use serde::{Deserialize, Serialize};

use super::error::{require_range, Result, ValidationError};

/// Fewest players a match may have.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match may have.
pub const MAX_PLAYERS: usize = 5;

/// Smallest row or column count of a linear board.
pub const MIN_GRID_DIMENSION: u32 = 5;

/// Largest row or column count of a linear board.
pub const MAX_GRID_DIMENSION: u32 = 12;

/// Smallest side length of a cross board.
pub const MIN_CROSS_SIZE: u32 = 9;

/// Largest side length of a cross board.
pub const MAX_CROSS_SIZE: u32 = 21;

/// Number of arms (and seats) on a cross board.
pub const CROSS_ARMS: usize = 4;

/// Tokens owned by each Ludo player.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Faces on each die.
pub const DIE_FACES: u8 = 6;

/// The roll that releases a Ludo token.
pub const RELEASE_ROLL: u32 = 6;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of dice thrown per turn (at least 1).
    pub dice_count: usize,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_count: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    /// One die, unseeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of dice.
    #[must_use]
    pub fn with_dice_count(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    /// Seed the RNG for a reproducible match.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dice_count == 0 {
            return Err(ValidationError::new("dice_count", 0, "at least 1 die").into());
        }
        Ok(())
    }
}

/// Check a player count against the match limits.
pub(crate) fn validate_player_count(count: usize, max: usize) -> Result<()> {
    require_range("player_count", count, MIN_PLAYERS, max)?;
    Ok(())
}
