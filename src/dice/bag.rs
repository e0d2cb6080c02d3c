//! A bag of dice rolled together.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, Result, ValidationError};

use super::die::Die;

/// One or more independent dice.
///
/// `total` is the sum of the last faces; unrolled dice count as 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    /// SmallVec keeps the usual one or two dice off the heap.
    dice: SmallVec<[Die; 4]>,
}

impl Dice {
    /// Create `count` unrolled dice. At least one die is required.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(ValidationError::new("dice_count", count, "at least 1 die").into());
        }
        Ok(Self {
            dice: SmallVec::from_elem(Die::new(), count),
        })
    }

    /// Number of dice in the bag.
    #[must_use]
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Smallest and largest possible totals.
    #[must_use]
    pub fn total_range(&self) -> (u32, u32) {
        let count = self.count() as u32;
        (count, count * 6)
    }

    /// Roll every die and return the total.
    pub fn roll(&mut self, rng: &mut GameRng) -> u32 {
        for die in &mut self.dice {
            die.roll(rng);
        }
        self.total()
    }

    /// Roll only the die at `index`, leaving the others as they are.
    pub fn roll_single(&mut self, index: usize, rng: &mut GameRng) -> Result<u8> {
        let count = self.count();
        let die = self.dice.get_mut(index).ok_or_else(|| {
            ValidationError::new("die_index", index, format!("an index below {}", count))
        })?;
        Ok(die.roll(rng))
    }

    /// Sum of the last faces.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| u32::from(d.last_value())).sum()
    }

    /// Last face of every die, in order.
    #[must_use]
    pub fn values(&self) -> SmallVec<[u8; 4]> {
        self.dice.iter().map(Die::last_value).collect()
    }

    /// Get a die by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }
}
