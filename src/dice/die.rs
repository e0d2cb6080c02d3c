//! A single six-sided die.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// One die and the face it last showed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    last_value: u8,
}

impl Die {
    /// An unrolled die.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_value: 0 }
    }

    /// The last face rolled, or 0 before the first roll.
    #[must_use]
    pub fn last_value(&self) -> u8 {
        self.last_value
    }

    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.last_value != 0
    }

    /// Roll and return the new face.
    pub fn roll(&mut self, rng: &mut GameRng) -> u8 {
        self.last_value = rng.roll_die();
        self.last_value
    }
}
