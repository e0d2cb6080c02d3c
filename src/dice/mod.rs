//! Dice.
//!
//! A [`Dice`] bag holds one or more independent six-sided [`Die`]s. Rolling
//! draws from a [`GameRng`](crate::core::GameRng) supplied by the caller so
//! the engine (or a test) controls the randomness.

mod bag;
mod die;

pub use bag::Dice;
pub use die::Die;
