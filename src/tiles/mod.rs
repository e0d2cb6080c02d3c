//! Tile graph vocabulary.
//!
//! - [`TileId`]: identity of a cell, unique per board
//! - [`Coordinates`]: where the cell is drawn
//! - [`Tile`]: id, coordinates, successor link and optional action
//! - [`TileAction`]: ladder, slide or portal effect on landing

mod action;
mod tile;

pub use action::TileAction;
pub use tile::{Coordinates, Tile, TileId};
