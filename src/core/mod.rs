//! Core building blocks: seats, colours, RNG, configuration, errors.
//!
//! Everything here is shared by both game variants.

pub mod color;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use color::Color;
pub use config::GameConfig;
pub use error::{GameError, Result, ValidationError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
