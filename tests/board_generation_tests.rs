//! Board generation properties.
//!
//! These tests check the linear and cross generators across their whole
//! input ranges: tile counts, zigzag order, rotational symmetry of the
//! cross board and determinism.

use proptest::prelude::*;

use tile_race::board::geometry::rotate;
use tile_race::board::CrossMetrics;
use tile_race::{Board, BoardInfo, Color, Coordinates, TileId, TileKind};

fn info() -> BoardInfo {
    BoardInfo::new("Generated", "Property test board").unwrap()
}

fn colors() -> [Color; 4] {
    [
        Color::rgb(200, 30, 30),
        Color::rgb(30, 30, 200),
        Color::rgb(30, 160, 30),
        Color::rgb(220, 200, 20),
    ]
}

fn cross_sizes() -> impl Strategy<Value = u32> {
    (4u32..=10).prop_map(|k| 2 * k + 1)
}

fn tile_id_at(board: &Board, coordinates: Coordinates) -> TileId {
    board.tile_at(coordinates).map(|t| t.id()).unwrap()
}

proptest! {
    /// A linear board has one tile per cell plus the home tile, all linked in order.
    #[test]
    fn test_linear_tiles_form_one_path(rows in 5u32..=12, columns in 5u32..=12) {
        let board = Board::linear(info(), rows, columns).unwrap();
        let count = rows * columns;
        prop_assert_eq!(board.tile_count(), count);
        prop_assert_eq!(board.tiles().count() as u32, count + 1);

        for tile in board.tiles() {
            let expected = (tile.id().0 < count).then(|| TileId(tile.id().0 + 1));
            prop_assert_eq!(tile.successor(), expected);
        }
    }

    /// Even rows run left to right, odd rows right to left.
    #[test]
    fn test_linear_rows_zigzag(rows in 5u32..=12, columns in 5u32..=12) {
        let board = Board::linear(info(), rows, columns).unwrap();
        for row in 0..rows {
            let first = tile_id_at(&board, Coordinates::new(row as i32, 0));
            let last = tile_id_at(&board, Coordinates::new(row as i32, columns as i32 - 1));
            if row % 2 == 0 {
                prop_assert_eq!(first.0, row * columns + 1);
                prop_assert_eq!(last.0, (row + 1) * columns);
            } else {
                prop_assert_eq!(first.0, (row + 1) * columns);
                prop_assert_eq!(last.0, row * columns + 1);
            }
        }
    }

    /// Every cell of an odd square grid is a tile and ids are dense.
    #[test]
    fn test_cross_fills_the_grid(size in cross_sizes()) {
        let board = Board::cross(info(), size, &colors()).unwrap();
        prop_assert_eq!(board.tile_count(), size * size);
        let ids: Vec<u32> = board.tiles().map(|t| t.id().0).collect();
        let dense: Vec<u32> = (1..=size * size).collect();
        prop_assert_eq!(ids, dense);

        let n = size as i32;
        for row in 0..n {
            for col in 0..n {
                prop_assert!(board.tile_at(Coordinates::new(row, col)).is_some());
            }
        }
    }

    /// Four disjoint start areas of s² tiles each.
    #[test]
    fn test_cross_start_areas(size in cross_sizes()) {
        let board = Board::cross(info(), size, &colors()).unwrap();
        let s = (size - 3) / 2;
        for seat in 0..4 {
            let count = board
                .tiles()
                .filter(|t| board.tile_kind(t.id()) == Some(TileKind::Start(seat)))
                .count();
            prop_assert_eq!(count as u32, s * s);
        }
    }

    /// A quarter turn of the board maps each seat's tiles onto the next seat's.
    #[test]
    fn test_cross_is_rotationally_symmetric(size in cross_sizes()) {
        let board = Board::cross(info(), size, &colors()).unwrap();
        let n = size as i32;
        let rotate_kind = |kind: TileKind| match kind {
            TileKind::Start(k) => TileKind::Start((k + 1) % 4),
            TileKind::Entry(k) => TileKind::Entry((k + 1) % 4),
            TileKind::Finish(k) => TileKind::Finish((k + 1) % 4),
            TileKind::Goal(k) => TileKind::Goal((k + 1) % 4),
            other => other,
        };

        for tile in board.tiles() {
            let turned = rotate(tile.coordinates(), n, n, 1);
            let kind = board.tile_kind(tile.id()).unwrap();
            let other = board.tile_at(turned).unwrap();
            prop_assert_eq!(board.tile_kind(other.id()), Some(rotate_kind(kind)));
        }
    }

    /// Track ordinals shift by one arm under a quarter turn.
    #[test]
    fn test_cross_track_ordinals_rotate(size in cross_sizes()) {
        let board = Board::cross(info(), size, &colors()).unwrap();
        let metrics = CrossMetrics::new(size).unwrap();
        let total = metrics.total_track_tiles();
        let per_arm = metrics.track_tiles_per_arm();
        let n = size as i32;

        for id in 1..=total {
            let tile = board.tile(TileId(id)).unwrap();
            let turned = rotate(tile.coordinates(), n, n, 1);
            let expected = (id - 1 + per_arm) % total + 1;
            prop_assert_eq!(tile_id_at(&board, turned), TileId(expected));
        }
    }
}

/// `board_size = 15` gives start areas of side 6 and 52 track tiles.
#[test]
fn test_fifteen_metrics() {
    let board = Board::cross(info(), 15, &colors()).unwrap();
    let metrics = board.cross_layout().unwrap().metrics();
    assert_eq!(metrics.start_area_size(), 6);
    assert_eq!(metrics.total_track_tiles(), 52);
    assert_eq!(board.tile_count(), 225);
}

/// `rows = 9, columns = 10` gives 90 playable tiles.
#[test]
fn test_ninety_tile_board() {
    let board = Board::linear(info(), 9, 10).unwrap();
    assert_eq!(board.tile_count(), 90);
    assert_eq!(board.tile(TileId(90)).unwrap().successor(), None);
    assert_eq!(board.tile(TileId(11)).unwrap().coordinates(), Coordinates::new(1, 9));
}

/// Generation is a pure function of its parameters.
#[test]
fn test_generation_is_deterministic() {
    let a = Board::cross(info(), 13, &colors()).unwrap();
    let b = Board::cross(info(), 13, &colors()).unwrap();
    assert_eq!(a, b);
}

/// Each arm's finish track leads from its turn tile to its goal, and goals are terminal.
#[test]
fn test_every_arm_reaches_its_goal() {
    let board = Board::cross(info(), 17, &colors()).unwrap();
    let layout = board.cross_layout().unwrap();
    for (seat, arm) in layout.arms().iter().enumerate() {
        let mut at = arm.entry;
        let mut steps = 0;
        while let Some(next) = arm.step(board.tile(at).unwrap()) {
            at = next;
            steps += 1;
            assert!(steps <= layout.metrics().total_track_tiles() + 10);
        }
        assert_eq!(at, arm.goal);
        assert_eq!(board.tile_kind(at), Some(TileKind::Goal(seat)));
        assert_eq!(board.tile(at).unwrap().successor(), None);
    }
}

/// Out-of-range and even sizes are rejected with the offending field.
#[test]
fn test_invalid_parameters() {
    let err = Board::linear(info(), 13, 5).unwrap_err();
    assert_eq!(err.as_validation().map(|v| v.field), Some("rows"));
    assert!(Board::cross(info(), 12, &colors()).is_err());
    assert!(Board::cross(info(), 23, &colors()).is_err());
    assert!(Board::cross(info(), 9, &colors()[..2]).is_err());
}
