//! Boards and their topology generators.
//!
//! A [`Board`] is produced by one of two pure generators:
//!
//! - [`linear`]: zigzag ladder-game boards of `rows × columns` tiles
//! - [`cross`]: four-arm Ludo boards built from one rotated template arm
//!
//! Both return a complete tile graph; the board wraps it with its
//! descriptive fields and answers lookups.

mod board;
pub mod cross;
pub mod geometry;
pub mod linear;

pub use board::{Board, BoardDimensions, BoardInfo, TileKind};
pub use cross::{ArmLayout, CrossLayout, CrossMetrics, CrossParams};
