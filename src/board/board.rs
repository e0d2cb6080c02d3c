//! The board value: descriptive fields plus a generated tile graph.
//!
//! A `Board` is a value. Regenerating it with new dimensions returns a new
//! board; an engine holding the old one is unaffected until it is handed
//! the new value. Tiles live in a persistent map, so cloning a board (or
//! deriving a new version by attaching an action) shares structure with
//! the original.

use std::fmt;

use im::OrdMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::require_text;
use crate::core::{Color, GameRng, Result, ValidationError};
use crate::tiles::{Coordinates, Tile, TileAction, TileId};

use super::cross::{self, CrossLayout, CrossParams};
use super::linear;

/// Descriptive fields shared by both board variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    name: String,
    description: String,
    background: String,
}

impl BoardInfo {
    /// Create board info; name and description must not be blank.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let description = description.into();
        require_text("name", &name)?;
        require_text("description", &description)?;
        Ok(Self {
            name,
            description,
            background: String::new(),
        })
    }

    /// Set the background (an image reference or colour; opaque to the core).
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }
}

/// Generation parameters of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardDimensions {
    /// Linear zigzag board.
    Grid { rows: u32, columns: u32 },
    /// Cross-shaped board of side `board_size`.
    Cross { board_size: u32 },
}

/// Role of a tile on its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Linear home tile.
    Home,
    /// Ordinary path tile.
    Track,
    /// Track tile where a seat's released tokens enter.
    Entry(usize),
    /// A seat's holding area.
    Start(usize),
    /// A seat's private run towards its goal.
    Finish(usize),
    /// A seat's personal goal.
    Goal(usize),
    /// Blank connector in the cross board centre.
    Centre,
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::Home => f.write_str("home"),
            TileKind::Track => f.write_str("track"),
            TileKind::Entry(seat) => write!(f, "entry-{}", seat + 1),
            TileKind::Start(seat) => write!(f, "start-{}", seat + 1),
            TileKind::Finish(seat) => write!(f, "finish-{}", seat + 1),
            TileKind::Goal(seat) => write!(f, "goal-{}", seat + 1),
            TileKind::Centre => f.write_str("centre"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Topology {
    Linear { rows: u32, columns: u32 },
    Cross(CrossLayout),
}

/// A complete, generated board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    info: BoardInfo,
    pattern: Option<String>,
    topology: Topology,
    tiles: OrdMap<TileId, Tile>,
}

impl Board {
    /// Generate a linear board of `rows × columns` tiles plus the home tile.
    pub fn linear(info: BoardInfo, rows: u32, columns: u32) -> Result<Self> {
        let tiles = linear::generate(rows, columns)?;
        info!(name = info.name(), rows, columns, "linear board created");
        Ok(Self {
            info,
            pattern: None,
            topology: Topology::Linear { rows, columns },
            tiles,
        })
    }

    /// Generate a cross board of side `board_size` with one colour per arm.
    pub fn cross(info: BoardInfo, board_size: u32, colors: &[Color]) -> Result<Self> {
        let params = CrossParams::new(board_size, colors)?;
        let (tiles, layout) = cross::generate(&params)?;
        info!(name = info.name(), board_size, "cross board created");
        Ok(Self {
            info,
            pattern: None,
            topology: Topology::Cross(layout),
            tiles,
        })
    }

    /// Set the decorative tile pattern (linear boards only).
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Result<Self> {
        if self.is_cross() {
            return Err(ValidationError::new("pattern", "cross board", "a linear board").into());
        }
        self.pattern = Some(pattern.into());
        Ok(self)
    }

    #[must_use]
    pub fn info(&self) -> &BoardInfo {
        &self.info
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.info.description()
    }

    #[must_use]
    pub fn background(&self) -> &str {
        self.info.background()
    }

    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    #[must_use]
    pub fn dimensions(&self) -> BoardDimensions {
        match &self.topology {
            Topology::Linear { rows, columns } => BoardDimensions::Grid {
                rows: *rows,
                columns: *columns,
            },
            Topology::Cross(layout) => BoardDimensions::Cross {
                board_size: layout.metrics().board_size(),
            },
        }
    }

    #[must_use]
    pub fn is_cross(&self) -> bool {
        matches!(self.topology, Topology::Cross(_))
    }

    /// Arm layout of a cross board.
    #[must_use]
    pub fn cross_layout(&self) -> Option<&CrossLayout> {
        match &self.topology {
            Topology::Cross(layout) => Some(layout),
            Topology::Linear { .. } => None,
        }
    }

    /// Number of playable tiles.
    ///
    /// Linear boards exclude the home tile, so the count doubles as the id
    /// of the final tile. Cross boards have no home tile.
    #[must_use]
    pub fn tile_count(&self) -> u32 {
        match &self.topology {
            Topology::Linear { rows, columns } => rows * columns,
            Topology::Cross(layout) => layout.metrics().tile_count(),
        }
    }

    /// The final tile of a linear board.
    #[must_use]
    pub fn last_tile(&self) -> TileId {
        TileId(self.tile_count())
    }

    /// Look up a tile, failing for ids outside the board.
    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        self.tiles.get(&id).ok_or_else(|| {
            let lowest = if self.is_cross() { 1 } else { 0 };
            ValidationError::new(
                "tile_id",
                id.0,
                format!("a tile id in [{}, {}]", lowest, self.tile_count()),
            )
            .into()
        })
    }

    /// All tiles in id order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// The tile drawn at `coordinates`, if any.
    #[must_use]
    pub fn tile_at(&self, coordinates: Coordinates) -> Option<&Tile> {
        match &self.topology {
            Topology::Linear { rows, columns } => {
                let on_grid = coordinates.row >= 0
                    && coordinates.col >= 0
                    && (coordinates.row as u32) < *rows
                    && (coordinates.col as u32) < *columns;
                if !on_grid {
                    return self
                        .tiles
                        .get(&TileId::HOME)
                        .filter(|t| t.coordinates() == coordinates);
                }
                let id =
                    linear::tile_id_at(*columns, coordinates.row as u32, coordinates.col as u32);
                self.tiles.get(&id)
            }
            Topology::Cross(_) => self.tiles.values().find(|t| t.coordinates() == coordinates),
        }
    }

    /// Classify a tile.
    #[must_use]
    pub fn tile_kind(&self, id: TileId) -> Option<TileKind> {
        match &self.topology {
            Topology::Linear { .. } if id == TileId::HOME => Some(TileKind::Home),
            Topology::Linear { .. } => self.tiles.contains_key(&id).then_some(TileKind::Track),
            Topology::Cross(layout) => layout.kind_of(id),
        }
    }

    /// Tiles carrying an action, with the action.
    pub fn actions(&self) -> impl Iterator<Item = (TileId, &TileAction)> {
        self.tiles.values().filter_map(|t| t.action().map(|a| (t.id(), a)))
    }

    /// Attach an action to a tile.
    ///
    /// Each tile takes at most one action per generation; regenerate the
    /// board to start over.
    pub fn set_action(&mut self, origin: TileId, action: TileAction) -> Result<()> {
        self.check_action_origin(origin)?;
        let destination = action.destination();
        if destination == origin
            || destination == TileId::HOME
            || !self.tiles.contains_key(&destination)
        {
            return Err(ValidationError::new(
                "action.destination",
                destination.0,
                format!("a tile in [1, {}] other than {}", self.tile_count(), origin.0),
            )
            .into());
        }

        debug!(
            origin = origin.0,
            destination = destination.0,
            kind = action.identifier(),
            "action placed"
        );
        if let Some(tile) = self.tiles.get_mut(&origin) {
            tile.set_action(action);
        }
        Ok(())
    }

    /// Place a ladder climbing `rise` rows and shifting `shift` columns.
    pub fn place_ladder(&mut self, origin: TileId, rise: u32, shift: i32) -> Result<TileId> {
        if rise == 0 {
            return Err(ValidationError::new("rise", rise, "at least one row").into());
        }
        let rows = i32::try_from(rise).map_err(|_| {
            ValidationError::new("rise", rise, format!("at most {} rows", i32::MAX))
        })?;
        let destination = self.offset_destination(origin, rows, shift)?;
        let description = format!("Climb from {} to {}", origin.0, destination.0);
        let action = TileAction::ladder(destination, description)?;
        self.set_action(origin, action)?;
        Ok(destination)
    }

    /// Place a slide dropping `drop` rows and shifting `shift` columns.
    pub fn place_slide(&mut self, origin: TileId, drop: u32, shift: i32) -> Result<TileId> {
        if drop == 0 {
            return Err(ValidationError::new("drop", drop, "at least one row").into());
        }
        let rows = i32::try_from(drop).map_err(|_| {
            ValidationError::new("drop", drop, format!("at most {} rows", i32::MAX))
        })?;
        let destination = self.offset_destination(origin, -rows, shift)?;
        let description = format!("Slide from {} to {}", origin.0, destination.0);
        let action = TileAction::slide(destination, description)?;
        self.set_action(origin, action)?;
        Ok(destination)
    }

    /// Place a portal to a tile drawn uniformly from the unoccupied ones.
    ///
    /// A tile is occupied when it is the home or final tile, the portal's
    /// own origin, or already the origin or destination of an action.
    pub fn place_portal(&mut self, origin: TileId, rng: &mut GameRng) -> Result<TileId> {
        self.check_action_origin(origin)?;
        let taken: Vec<TileId> = self
            .actions()
            .flat_map(|(from, action)| [from, action.destination()])
            .collect();
        let last = self.last_tile();
        let free: Vec<TileId> = self
            .tiles
            .keys()
            .copied()
            .filter(|&id| id != TileId::HOME && id != last && id != origin && !taken.contains(&id))
            .collect();

        let destination = *rng.choose(&free).ok_or_else(|| {
            ValidationError::new("origin", origin.0, "a board with a free tile for the portal")
        })?;
        let description = format!("Portal from {} to {}", origin.0, destination.0);
        let action = TileAction::portal(destination, description)?;
        self.set_action(origin, action)?;
        Ok(destination)
    }

    /// Generate a new board with the same info for new dimensions.
    ///
    /// Linear boards keep every action whose origin and destination still
    /// exist as ordinary tiles; the rest are dropped. Cross boards are
    /// regenerated from scratch with the same arm colours.
    pub fn regenerate(&self, dimensions: BoardDimensions) -> Result<Board> {
        match (&self.topology, dimensions) {
            (Topology::Linear { .. }, BoardDimensions::Grid { rows, columns }) => {
                let mut board = Board::linear(self.info.clone(), rows, columns)?;
                board.pattern = self.pattern.clone();
                let last = board.last_tile();
                for (origin, action) in self.actions() {
                    let destination = action.destination();
                    let keep = origin < last && destination <= last && destination != origin;
                    if keep {
                        board.set_action(origin, action.clone())?;
                    } else {
                        debug!(origin = origin.0, "action dropped on resize");
                    }
                }
                Ok(board)
            }
            (Topology::Cross(layout), BoardDimensions::Cross { board_size }) => {
                Board::cross(self.info.clone(), board_size, &layout.colors())
            }
            (_, other) => Err(ValidationError::new(
                "dimensions",
                format!("{:?}", other),
                "dimensions of the same board variant",
            )
            .into()),
        }
    }

    fn check_action_origin(&self, origin: TileId) -> Result<()> {
        if self.is_cross() {
            return Err(ValidationError::new("origin", origin.0, "a tile of a linear board").into());
        }
        let tile = self.tile(origin)?;
        if origin == TileId::HOME || origin == self.last_tile() {
            return Err(ValidationError::new(
                "origin",
                origin.0,
                format!("a tile in [1, {}]", self.tile_count() - 1),
            )
            .into());
        }
        if tile.action().is_some() {
            return Err(ValidationError::new("origin", origin.0, "a tile without an action").into());
        }
        Ok(())
    }

    fn offset_destination(&self, origin: TileId, rows: i32, cols: i32) -> Result<TileId> {
        let from = self.tile(origin)?.coordinates();
        let target = from.checked_offset(rows, cols).ok_or_else(|| {
            ValidationError::new(
                "destination",
                from,
                format!("an offset of ({}, {}) that stays on the board", rows, cols),
            )
        })?;
        self.tile_at(target)
            .filter(|t| t.id() != TileId::HOME)
            .map(Tile::id)
            .ok_or_else(|| {
                ValidationError::new("destination", target, "a position on the board").into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> BoardInfo {
        BoardInfo::new("Jungle", "Vines and rivers").unwrap()
    }

    fn colors() -> Vec<Color> {
        vec![
            Color::rgb(200, 0, 0),
            Color::rgb(0, 0, 200),
            Color::rgb(0, 200, 0),
            Color::rgb(200, 200, 0),
        ]
    }

    #[test]
    fn test_info_rejects_blank() {
        assert!(BoardInfo::new(" ", "x").is_err());
        let err = BoardInfo::new("x", "").unwrap_err();
        assert_eq!(err.as_validation().map(|v| v.field), Some("description"));
    }

    #[test]
    fn test_linear_counts() {
        let board = Board::linear(info(), 9, 10).unwrap();
        assert_eq!(board.tile_count(), 90);
        assert_eq!(board.tiles().count(), 91);
        assert_eq!(board.last_tile(), TileId(90));
        assert_eq!(board.dimensions(), BoardDimensions::Grid { rows: 9, columns: 10 });
    }

    #[test]
    fn test_tile_lookup_bounds() {
        let board = Board::linear(info(), 5, 5).unwrap();
        assert!(board.tile(TileId(25)).is_ok());
        let err = board.tile(TileId(26)).unwrap_err();
        assert_eq!(err.as_validation().map(|v| v.field), Some("tile_id"));
    }

    #[test]
    fn test_tile_at() {
        let board = Board::linear(info(), 5, 5).unwrap();
        assert_eq!(board.tile_at(Coordinates::new(1, 4)).map(Tile::id), Some(TileId(6)));
        assert_eq!(board.tile_at(Coordinates::new(0, -2)).map(Tile::id), Some(TileId::HOME));
        assert!(board.tile_at(Coordinates::new(5, 0)).is_none());
    }

    #[test]
    fn test_pattern_linear_only() {
        let board = Board::linear(info(), 5, 5).unwrap().with_pattern("checker").unwrap();
        assert_eq!(board.pattern(), Some("checker"));

        let cross = Board::cross(info(), 9, &colors()).unwrap();
        assert!(cross.with_pattern("checker").is_err());
    }

    #[test]
    fn test_place_ladder_and_slide() {
        let mut board = Board::linear(info(), 5, 5).unwrap();
        // tile 3 sits at (0, 2); two rows up is (2, 2) = tile 13
        assert_eq!(board.place_ladder(TileId(3), 2, 0).unwrap(), TileId(13));
        // tile 17 sits at (3, 3); one row down, one right is (2, 4) = tile 15
        assert_eq!(board.place_slide(TileId(17), 1, 1).unwrap(), TileId(15));

        let action = board.tile(TileId(3)).unwrap().action().unwrap();
        assert!(matches!(action, TileAction::Ladder { .. }));
        assert_eq!(board.actions().count(), 2);
    }

    #[test]
    fn test_ladder_off_board_rejected() {
        let mut board = Board::linear(info(), 5, 5).unwrap();
        assert!(board.place_ladder(TileId(21), 1, 0).is_err());
        assert!(board.place_ladder(TileId(3), 0, 1).is_err());
        assert!(board.place_slide(TileId(3), 1, 0).is_err());
    }

    #[test]
    fn test_huge_offsets_rejected() {
        let mut board = Board::linear(info(), 5, 5).unwrap();
        let field = |r: Result<TileId>| r.unwrap_err().as_validation().map(|v| v.field);

        assert_eq!(field(board.place_slide(TileId(15), u32::MAX, 0)), Some("drop"));
        assert_eq!(field(board.place_slide(TileId(15), 1 << 31, 0)), Some("drop"));
        assert_eq!(field(board.place_ladder(TileId(25), u32::MAX, 0)), Some("rise"));
        assert_eq!(field(board.place_ladder(TileId(15), 1, i32::MAX)), Some("destination"));
        assert_eq!(field(board.place_slide(TileId(15), 1, i32::MIN)), Some("destination"));
        assert_eq!(board.actions().count(), 0);
    }

    #[test]
    fn test_action_set_once() {
        let mut board = Board::linear(info(), 5, 5).unwrap();
        board.place_ladder(TileId(3), 1, 0).unwrap();
        assert!(board.place_ladder(TileId(3), 2, 0).is_err());
    }

    #[test]
    fn test_action_origin_restrictions() {
        let mut board = Board::linear(info(), 5, 5).unwrap();
        let up = TileAction::ladder(TileId(10), "up").unwrap();
        assert!(board.set_action(TileId::HOME, up.clone()).is_err());
        assert!(board.set_action(TileId(25), up.clone()).is_err());
        assert!(board.set_action(TileId(10), up).is_err());

        let mut cross = Board::cross(info(), 9, &colors()).unwrap();
        let portal = TileAction::portal(TileId(4), "jump").unwrap();
        assert!(cross.set_action(TileId(2), portal).is_err());
    }

    #[test]
    fn test_portal_avoids_occupied_tiles() {
        let mut board = Board::linear(info(), 5, 5).unwrap();
        board.place_ladder(TileId(3), 2, 0).unwrap();
        let mut rng = GameRng::new(5);

        for origin in [4, 5, 6, 7] {
            let destination = board.place_portal(TileId(origin), &mut rng).unwrap();
            let taken = [TileId::HOME, TileId(3), TileId(13), TileId(25), TileId(origin)];
            assert!(!taken.contains(&destination));
        }
    }

    #[test]
    fn test_portal_is_seeded() {
        let mut a = Board::linear(info(), 6, 6).unwrap();
        let mut b = a.clone();
        let da = a.place_portal(TileId(8), &mut GameRng::new(77)).unwrap();
        let db = b.place_portal(TileId(8), &mut GameRng::new(77)).unwrap();
        assert_eq!(da, db);
    }

    #[test]
    fn test_regenerate_keeps_fitting_actions() {
        let mut board = Board::linear(info(), 8, 8).unwrap().with_pattern("stripes").unwrap();
        assert_eq!(board.place_ladder(TileId(3), 2, 0).unwrap(), TileId(19));
        assert_eq!(board.place_ladder(TileId(20), 4, 0).unwrap(), TileId(52));
        assert_eq!(board.place_slide(TileId(40), 3, 0).unwrap(), TileId(9));

        let smaller = board.regenerate(BoardDimensions::Grid { rows: 5, columns: 5 }).unwrap();
        assert_eq!(smaller.tile_count(), 25);
        assert_eq!(smaller.pattern(), Some("stripes"));
        let kept: Vec<_> = smaller.actions().map(|(origin, _)| origin).collect();
        assert_eq!(kept, vec![TileId(3)]);

        let larger = board.regenerate(BoardDimensions::Grid { rows: 10, columns: 10 }).unwrap();
        assert_eq!(larger.actions().count(), 3);
        let ladder = larger.tile(TileId(3)).unwrap().action();
        assert_eq!(ladder.map(TileAction::destination), Some(TileId(19)));
    }

    #[test]
    fn test_regenerate_cross() {
        let board = Board::cross(info(), 9, &colors()).unwrap();
        let bigger = board.regenerate(BoardDimensions::Cross { board_size: 13 }).unwrap();
        assert_eq!(bigger.tile_count(), 169);
        assert_eq!(
            bigger.cross_layout().map(CrossLayout::colors),
            board.cross_layout().map(CrossLayout::colors)
        );
        assert!(board.regenerate(BoardDimensions::Grid { rows: 5, columns: 5 }).is_err());
    }

    #[test]
    fn test_tile_kind_display() {
        assert_eq!(TileKind::Start(0).to_string(), "start-1");
        assert_eq!(TileKind::Goal(3).to_string(), "goal-4");
        let board = Board::linear(info(), 5, 5).unwrap();
        assert_eq!(board.tile_kind(TileId::HOME), Some(TileKind::Home));
        assert_eq!(board.tile_kind(TileId(7)), Some(TileKind::Track));
        assert_eq!(board.tile_kind(TileId(26)), None);
    }
}
