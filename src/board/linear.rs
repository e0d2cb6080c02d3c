//! Linear (zigzag) board generation.
//!
//! Tiles snake up the board: even rows (counted from the bottom) run left to
//! right, odd rows right to left. Id 0 is the home tile, drawn off-grid at
//! `(0, -2)`, where every player waits before their first roll.

use im::OrdMap;
use tracing::debug;

use crate::core::config::{MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};
use crate::core::error::require_range;
use crate::core::Result;
use crate::tiles::{Coordinates, Tile, TileId};

/// Where the home tile is drawn.
pub const HOME_COORDINATES: Coordinates = Coordinates::new(0, -2);

/// Check linear board dimensions.
pub fn validate(rows: u32, columns: u32) -> Result<()> {
    require_range("rows", rows, MIN_GRID_DIMENSION, MAX_GRID_DIMENSION)?;
    require_range("columns", columns, MIN_GRID_DIMENSION, MAX_GRID_DIMENSION)?;
    Ok(())
}

/// Id of the tile at row `row` (from the bottom) and column `col`.
#[must_use]
pub fn tile_id_at(columns: u32, row: u32, col: u32) -> TileId {
    let id = if row % 2 == 0 {
        row * columns + col + 1
    } else {
        row * columns + (columns - col)
    };
    TileId(id)
}

/// Grid position of a non-home tile id.
///
/// Inverse of [`tile_id_at`]; `id` must be at least 1.
#[must_use]
pub fn coordinates_of(columns: u32, id: TileId) -> Coordinates {
    let index = id.0 - 1;
    let row = index / columns;
    let offset = index % columns;
    let col = if row % 2 == 0 { offset } else { columns - 1 - offset };
    Coordinates::new(row as i32, col as i32)
}

/// Build the tile graph for a `rows × columns` board.
///
/// The result holds `rows * columns + 1` tiles keyed densely from 0.
pub fn generate(rows: u32, columns: u32) -> Result<OrdMap<TileId, Tile>> {
    validate(rows, columns)?;

    let last = rows * columns;
    let mut tiles = OrdMap::new();
    tiles.insert(TileId::HOME, Tile::new(TileId::HOME, HOME_COORDINATES, Some(TileId(1))));

    for row in 0..rows {
        for col in 0..columns {
            let id = tile_id_at(columns, row, col);
            let successor = (id.0 < last).then(|| TileId(id.0 + 1));
            let coordinates = Coordinates::new(row as i32, col as i32);
            tiles.insert(id, Tile::new(id, coordinates, successor));
        }
    }

    debug!(rows, columns, tiles = tiles.len(), "generated linear board");
    Ok(tiles)
}
