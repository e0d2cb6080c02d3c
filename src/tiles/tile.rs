//! Tile identity, coordinates and the tile record itself.

use serde::{Deserialize, Serialize};

use super::action::TileAction;

/// Identifier of a tile, unique within one board.
///
/// On linear boards id 0 is the home tile; cross boards start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// The home tile of a linear board.
    pub const HOME: TileId = TileId(0);

    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A `(row, col)` grid position.
///
/// Linear boards count rows from the bottom; cross boards count from the
/// top. Only the linear home tile uses a negative column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub row: i32,
    pub col: i32,
}

impl Coordinates {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by a row and column offset.
    #[must_use]
    pub const fn offset(self, rows: i32, cols: i32) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }

    /// Shift by a row and column offset, `None` on overflow.
    #[must_use]
    pub fn checked_offset(self, rows: i32, cols: i32) -> Option<Self> {
        Some(Self::new(self.row.checked_add(rows)?, self.col.checked_add(cols)?))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One addressable cell of the board graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    coordinates: Coordinates,
    successor: Option<TileId>,
    action: Option<TileAction>,
}

impl Tile {
    /// Create a tile without an action.
    pub fn new(id: TileId, coordinates: Coordinates, successor: Option<TileId>) -> Self {
        Self {
            id,
            coordinates,
            successor,
            action: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// The next tile along the default path.
    ///
    /// `None` marks a terminal tile or one whose next step depends on who
    /// is moving (start areas, the cross board centre).
    #[must_use]
    pub fn successor(&self) -> Option<TileId> {
        self.successor
    }

    /// The effect triggered when a piece lands here.
    #[must_use]
    pub fn action(&self) -> Option<&TileAction> {
        self.action.as_ref()
    }

    pub(crate) fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
    }

    pub(crate) fn set_action(&mut self, action: TileAction) {
        self.action = Some(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id() {
        let id = TileId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Tile(5)");
        assert_eq!(TileId::HOME, TileId(0));
    }

    #[test]
    fn test_coordinates_offset() {
        let c = Coordinates::new(2, 3).offset(1, -1);
        assert_eq!(c, Coordinates::new(3, 2));
        assert_eq!(c.to_string(), "(3, 2)");
    }

    #[test]
    fn test_checked_offset_overflow() {
        let c = Coordinates::new(2, 3);
        assert_eq!(c.checked_offset(-1, 1), Some(Coordinates::new(1, 4)));
        assert_eq!(c.checked_offset(0, i32::MAX), None);
        assert_eq!(c.checked_offset(i32::MIN, 0), Some(Coordinates::new(i32::MIN + 2, 3)));
        assert_eq!(Coordinates::new(-1, 0).checked_offset(i32::MIN, 0), None);
    }

    #[test]
    fn test_tile_new_has_no_action() {
        let tile = Tile::new(TileId(4), Coordinates::new(0, 3), Some(TileId(5)));
        assert_eq!(tile.id(), TileId(4));
        assert_eq!(tile.successor(), Some(TileId(5)));
        assert!(tile.action().is_none());
    }
}
