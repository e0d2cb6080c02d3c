//! Quarter-turn rotation of grid coordinates.
//!
//! A box of `rows × cols` cells rotated a quarter turn clockwise becomes a
//! box of `cols × rows` cells, with `(r, c) → (c, rows - 1 - r)`.

use crate::tiles::Coordinates;

/// Rotate a coordinate a quarter turn clockwise inside a box `bound_rows` tall.
#[must_use]
pub fn rotate_quarter(coords: Coordinates, bound_rows: i32) -> Coordinates {
    Coordinates::new(coords.col, bound_rows - 1 - coords.row)
}

/// Rotate a coordinate `turns` quarter turns inside a `rows × cols` box.
///
/// The box dimensions swap after every turn.
///
/// ```
/// use tile_race::board::geometry::rotate;
/// use tile_race::tiles::Coordinates;
///
/// // The middle of the left edge of a 3×3 box ends up at the top.
/// assert_eq!(rotate(Coordinates::new(1, 0), 3, 3, 1), Coordinates::new(0, 1));
/// ```
#[must_use]
pub fn rotate(coords: Coordinates, rows: i32, cols: i32, turns: usize) -> Coordinates {
    let (mut coords, mut rows, mut cols) = (coords, rows, cols);
    for _ in 0..turns % 4 {
        coords = rotate_quarter(coords, rows);
        std::mem::swap(&mut rows, &mut cols);
    }
    coords
}

/// Dimensions of a `rows × cols` box after `turns` quarter turns.
#[must_use]
pub fn rotated_bounds(rows: i32, cols: i32, turns: usize) -> (i32, i32) {
    if turns % 2 == 0 {
        (rows, cols)
    } else {
        (cols, rows)
    }
}
