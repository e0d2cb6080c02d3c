//! Cross-shaped (four-arm) board generation.
//!
//! ## Layout
//!
//! A board of side `N` (odd, 9..=21) splits into three bands of rows and
//! three spans of columns. With `s = (N - 3) / 2`:
//!
//! ```text
//!            s      3      s
//!        +------+------+------+
//!      s |start1| arm 2|start2|
//!        +------+------+------+
//!      3 | arm 1|centre| arm 3|
//!        +------+------+------+
//!      s |start4| arm 4|start3|
//!        +------+------+------+
//! ```
//!
//! Each arm is 3 × s cells: two outer rows of shared track, the tip cell
//! between them, and a finish track of `s - 1` cells down the middle that
//! ends in the owner's goal inside the centre.
//!
//! ## Id Layout
//!
//! Ids run from the shared track (`1..=total_track_tiles`, clockwise, arm
//! by arm) through the centre (9 ids) and the four finish tracks to the four
//! start areas, which take the top range.
//!
//! ## Generation
//!
//! Only the first arm and the first start area are laid out by hand. The
//! other three are the same templates rotated a quarter turn at a time;
//! ids and successors are computed per arm and never rotated, so the
//! topology stays correct while the drawing turns. The centre is generated
//! directly. Everything is then stitched into one grid, band by band.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::config::{CROSS_ARMS, MAX_CROSS_SIZE, MIN_CROSS_SIZE, TOKENS_PER_PLAYER};
use crate::core::error::require_range;
use crate::core::{Color, GameError, Result, ValidationError};
use crate::tiles::{Coordinates, Tile, TileId};

use super::board::TileKind;
use super::geometry::{rotate, rotated_bounds};

/// Side length of the centre section.
const CENTRE: i32 = 3;

/// Numbers derived from the board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossMetrics {
    board_size: u32,
}

impl CrossMetrics {
    /// Validate a board size: odd and within `[9, 21]`.
    pub fn new(board_size: u32) -> Result<Self> {
        require_range("board_size", board_size, MIN_CROSS_SIZE, MAX_CROSS_SIZE)?;
        if board_size % 2 == 0 {
            return Err(ValidationError::new("board_size", board_size, "an odd number").into());
        }
        Ok(Self { board_size })
    }

    #[must_use]
    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    /// Side length of each player's square holding area.
    #[must_use]
    pub fn start_area_size(&self) -> u32 {
        (self.board_size - 3) / 2
    }

    #[must_use]
    pub fn tiles_per_start_area(&self) -> u32 {
        self.start_area_size() * self.start_area_size()
    }

    #[must_use]
    pub fn finish_track_size(&self) -> u32 {
        self.start_area_size() - 1
    }

    #[must_use]
    pub fn track_tiles_per_arm(&self) -> u32 {
        3 + 2 * self.finish_track_size()
    }

    #[must_use]
    pub fn total_track_tiles(&self) -> u32 {
        CROSS_ARMS as u32 * self.track_tiles_per_arm()
    }

    /// Every cell of the grid is a tile.
    #[must_use]
    pub fn tile_count(&self) -> u32 {
        self.board_size * self.board_size
    }

    #[must_use]
    pub fn centre_first_id(&self) -> u32 {
        self.total_track_tiles() + 1
    }

    #[must_use]
    pub fn finish_first_id(&self) -> u32 {
        self.centre_first_id() + (CENTRE * CENTRE) as u32
    }

    #[must_use]
    pub fn start_first_id(&self) -> u32 {
        self.finish_first_id() + CROSS_ARMS as u32 * self.finish_track_size()
    }

    /// Ordinal of the entry cell within an arm's track.
    #[must_use]
    pub fn entry_ordinal(&self) -> u32 {
        self.start_area_size() + 2
    }

    /// Ordinal of the tip cell where the owner turns into the finish track.
    #[must_use]
    pub fn turn_ordinal(&self) -> u32 {
        self.start_area_size()
    }

    fn track_id(&self, arm: usize, ordinal: u32) -> TileId {
        TileId(arm as u32 * self.track_tiles_per_arm() + ordinal + 1)
    }

    fn finish_id(&self, arm: usize, ordinal: u32) -> TileId {
        TileId(self.finish_first_id() + arm as u32 * self.finish_track_size() + ordinal)
    }

    fn centre_id(&self, offset: u32) -> TileId {
        TileId(self.centre_first_id() + offset)
    }

    fn start_id(&self, arm: usize, offset: u32) -> TileId {
        TileId(self.start_first_id() + arm as u32 * self.tiles_per_start_area() + offset)
    }

    fn s(&self) -> i32 {
        self.start_area_size() as i32
    }
}

/// One seat's section of a cross board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmLayout {
    /// Arm colour.
    pub color: Color,
    /// Where a released token enters the shared track.
    pub entry: TileId,
    /// Last shared-track tile before the finish track.
    pub turn: TileId,
    /// Finish-track tiles, outermost first.
    pub finish_track: SmallVec<[TileId; 9]>,
    /// The personal goal (terminal).
    pub goal: TileId,
    /// First id of the start area.
    pub start_first: TileId,
    /// Last id of the start area.
    pub start_last: TileId,
    /// Resting tile of each token, by token index.
    pub token_slots: [TileId; TOKENS_PER_PLAYER],
}

impl ArmLayout {
    /// Check whether `tile` lies in this arm's start area.
    #[must_use]
    pub fn contains_start(&self, tile: TileId) -> bool {
        (self.start_first..=self.start_last).contains(&tile)
    }

    /// Next tile for a token owned by this arm, or `None` at the goal.
    ///
    /// The shared track is left at the turn tile.
    #[must_use]
    pub fn step(&self, from: &Tile) -> Option<TileId> {
        if from.id() == self.turn {
            return self.finish_track.first().copied().or(Some(self.goal));
        }
        from.successor()
    }
}

/// Validated topology and per-arm layout of a cross board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossLayout {
    metrics: CrossMetrics,
    arms: [ArmLayout; CROSS_ARMS],
}

impl CrossLayout {
    #[must_use]
    pub fn metrics(&self) -> &CrossMetrics {
        &self.metrics
    }

    /// Layout of the arm at `seat` (0-based).
    #[must_use]
    pub fn arm(&self, seat: usize) -> Option<&ArmLayout> {
        self.arms.get(seat)
    }

    #[must_use]
    pub fn arms(&self) -> &[ArmLayout; CROSS_ARMS] {
        &self.arms
    }

    /// Arm colours in seat order.
    #[must_use]
    pub fn colors(&self) -> [Color; CROSS_ARMS] {
        std::array::from_fn(|i| self.arms[i].color)
    }

    /// Classify a tile id.
    #[must_use]
    pub fn kind_of(&self, id: TileId) -> Option<TileKind> {
        let m = &self.metrics;
        let raw = id.0;
        if raw == 0 || raw > m.tile_count() {
            return None;
        }
        if raw < m.centre_first_id() {
            let kind = self
                .arms
                .iter()
                .position(|arm| arm.entry == id)
                .map_or(TileKind::Track, TileKind::Entry);
            return Some(kind);
        }
        if raw < m.finish_first_id() {
            let kind = self
                .arms
                .iter()
                .position(|arm| arm.goal == id)
                .map_or(TileKind::Centre, TileKind::Goal);
            return Some(kind);
        }
        if raw < m.start_first_id() {
            let seat = (raw - m.finish_first_id()) / m.finish_track_size();
            return Some(TileKind::Finish(seat as usize));
        }
        let seat = (raw - m.start_first_id()) / m.tiles_per_start_area();
        Some(TileKind::Start(seat as usize))
    }
}

/// Validated input for the cross generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossParams {
    metrics: CrossMetrics,
    colors: [Color; CROSS_ARMS],
}

impl CrossParams {
    /// Validate the board size and exactly four distinct colours.
    pub fn new(board_size: u32, colors: &[Color]) -> Result<Self> {
        let metrics = CrossMetrics::new(board_size)?;
        let colors: [Color; CROSS_ARMS] = colors.try_into().map_err(|_| {
            ValidationError::new("colors", format!("{} colours", colors.len()), "exactly 4 colours")
        })?;
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(ValidationError::new("colors", color, "four distinct colours").into());
            }
        }
        Ok(Self { metrics, colors })
    }

    #[must_use]
    pub fn metrics(&self) -> CrossMetrics {
        self.metrics
    }
}

/// Role of a cell in the template arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArmRole {
    /// Shared track, clockwise ordinal within the arm.
    Track(u32),
    /// Finish track, ordinal from the tip towards the centre.
    Finish(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Section {
    Start(usize),
    Arm(usize),
    Centre,
}

/// Generated tiles of one section, keyed by section-local coordinates.
struct SectionTiles {
    rows: i32,
    cols: i32,
    cells: FxHashMap<Coordinates, Tile>,
}

/// Which section covers each band/span of the grid.
const SECTION_GRID: [[Section; 3]; 3] = [
    [Section::Start(0), Section::Arm(1), Section::Start(1)],
    [Section::Arm(0), Section::Centre, Section::Arm(2)],
    [Section::Start(3), Section::Arm(3), Section::Start(2)],
];

/// The template arm: 3 rows × s columns, tip at column 0.
///
/// Track ordinals run clockwise: the bottom row towards the tip, the tip
/// cell, the top corner, then the top row back towards the centre.
fn arm_template(m: &CrossMetrics) -> Vec<(Coordinates, ArmRole)> {
    let s = m.s();
    let mut cells = Vec::with_capacity(3 * s as usize);
    for col in (0..s).rev() {
        cells.push((Coordinates::new(2, col), ArmRole::Track((s - 1 - col) as u32)));
    }
    cells.push((Coordinates::new(1, 0), ArmRole::Track(s as u32)));
    cells.push((Coordinates::new(0, 0), ArmRole::Track(s as u32 + 1)));
    for col in 1..s {
        cells.push((Coordinates::new(0, col), ArmRole::Track((s + 1 + col) as u32)));
    }
    for col in 1..s {
        cells.push((Coordinates::new(1, col), ArmRole::Finish((col - 1) as u32)));
    }
    cells
}

/// Centre offset (row-major in the 3×3 section) of an arm's goal.
fn goal_offset(arm: usize) -> u32 {
    let c = rotate(Coordinates::new(1, 0), CENTRE, CENTRE, arm);
    (c.row * CENTRE + c.col) as u32
}

fn goal_id(m: &CrossMetrics, arm: usize) -> TileId {
    m.centre_id(goal_offset(arm))
}

fn arm_section(m: &CrossMetrics, arm: usize, template: &[(Coordinates, ArmRole)]) -> SectionTiles {
    let s = m.s();
    let last_track = m.track_tiles_per_arm() - 1;
    let last_finish = m.finish_track_size() - 1;
    let (rows, cols) = rotated_bounds(3, s, arm);

    let cells = template
        .iter()
        .map(|&(local, role)| {
            let (id, successor) = match role {
                ArmRole::Track(ordinal) if ordinal == last_track => {
                    (m.track_id(arm, ordinal), m.track_id((arm + 1) % CROSS_ARMS, 0))
                }
                ArmRole::Track(ordinal) => (m.track_id(arm, ordinal), m.track_id(arm, ordinal + 1)),
                ArmRole::Finish(ordinal) if ordinal == last_finish => {
                    (m.finish_id(arm, ordinal), goal_id(m, arm))
                }
                ArmRole::Finish(ordinal) => {
                    (m.finish_id(arm, ordinal), m.finish_id(arm, ordinal + 1))
                }
            };
            let at = rotate(local, 3, s, arm);
            (at, Tile::new(id, at, Some(successor)))
        })
        .collect();

    SectionTiles { rows, cols, cells }
}

fn start_section(m: &CrossMetrics, arm: usize) -> SectionTiles {
    let s = m.s();
    let mut cells = FxHashMap::default();
    for row in 0..s {
        for col in 0..s {
            let id = m.start_id(arm, (row * s + col) as u32);
            let at = rotate(Coordinates::new(row, col), s, s, arm);
            cells.insert(at, Tile::new(id, at, None));
        }
    }
    SectionTiles { rows: s, cols: s, cells }
}

fn centre_section(m: &CrossMetrics) -> SectionTiles {
    let mut cells = FxHashMap::default();
    for offset in 0..(CENTRE * CENTRE) {
        let at = Coordinates::new(offset / CENTRE, offset % CENTRE);
        cells.insert(at, Tile::new(m.centre_id(offset as u32), at, None));
    }
    SectionTiles {
        rows: CENTRE,
        cols: CENTRE,
        cells,
    }
}

fn token_slots(m: &CrossMetrics, arm: usize) -> [TileId; TOKENS_PER_PLAYER] {
    let s = m.s();
    let inset = if s >= 4 { 1 } else { 0 };
    let (near, far) = (inset, s - 1 - inset);
    [(near, near), (near, far), (far, near), (far, far)]
        .map(|(row, col)| m.start_id(arm, (row * s + col) as u32))
}

fn arm_layout(m: &CrossMetrics, arm: usize, color: Color) -> ArmLayout {
    let s = m.tiles_per_start_area();
    let start_first = m.start_id(arm, 0);
    ArmLayout {
        color,
        entry: m.track_id(arm, m.entry_ordinal()),
        turn: m.track_id(arm, m.turn_ordinal()),
        finish_track: (0..m.finish_track_size()).map(|i| m.finish_id(arm, i)).collect(),
        goal: goal_id(m, arm),
        start_first,
        start_last: TileId(start_first.0 + s - 1),
        token_slots: token_slots(m, arm),
    }
}

/// Place every section's tiles on the full grid.
fn stitch(
    m: &CrossMetrics,
    mut sections: FxHashMap<Section, SectionTiles>,
) -> Result<OrdMap<TileId, Tile>> {
    let s = m.s();
    let spans = [(0, s), (s, CENTRE), (s + CENTRE, s)];
    let mut tiles = OrdMap::new();

    for (band, &(row_origin, height)) in spans.iter().enumerate() {
        for (span, &(col_origin, width)) in spans.iter().enumerate() {
            let key = SECTION_GRID[band][span];
            let section = sections
                .get_mut(&key)
                .ok_or_else(|| GameError::topology(format!("{:?} was not generated", key)))?;
            if (section.rows, section.cols) != (height, width) {
                return Err(GameError::topology(format!(
                    "{:?} is {}×{}, slot at ({}, {}) is {}×{}",
                    key, section.rows, section.cols, row_origin, col_origin, height, width
                )));
            }

            for row in 0..height {
                for col in 0..width {
                    let local = Coordinates::new(row, col);
                    let at = local.offset(row_origin, col_origin);
                    let mut tile = section.cells.remove(&local).ok_or_else(|| {
                        GameError::topology(format!(
                            "{:?} has no tile at local {} for cell {}",
                            key, local, at
                        ))
                    })?;
                    tile.set_coordinates(at);
                    let id = tile.id();
                    if tiles.insert(id, tile).is_some() {
                        return Err(GameError::topology(format!(
                            "{} placed twice, again at {}",
                            id, at
                        )));
                    }
                }
            }
        }
    }

    if let Some((key, section)) = sections.iter().find(|(_, section)| !section.cells.is_empty()) {
        return Err(GameError::topology(format!(
            "{:?} left {} tiles unplaced",
            key,
            section.cells.len()
        )));
    }

    let dense = tiles.len() as u32 == m.tile_count()
        && tiles.keys().enumerate().all(|(i, id)| id.0 == i as u32 + 1);
    if !dense {
        return Err(GameError::topology(format!(
            "expected ids 1..={} but generated {} tiles",
            m.tile_count(),
            tiles.len()
        )));
    }

    Ok(tiles)
}

/// Build the tile graph and arm layout of a cross board.
pub fn generate(params: &CrossParams) -> Result<(OrdMap<TileId, Tile>, CrossLayout)> {
    let m = params.metrics;
    let template = arm_template(&m);

    let mut sections = FxHashMap::default();
    sections.insert(Section::Centre, centre_section(&m));
    for arm in 0..CROSS_ARMS {
        sections.insert(Section::Arm(arm), arm_section(&m, arm, &template));
        sections.insert(Section::Start(arm), start_section(&m, arm));
    }

    let tiles = stitch(&m, sections)?;
    let layout = CrossLayout {
        metrics: m,
        arms: std::array::from_fn(|arm| arm_layout(&m, arm, params.colors[arm])),
    };

    debug!(
        board_size = m.board_size(),
        start_area_size = m.start_area_size(),
        tiles = tiles.len(),
        "generated cross board"
    );
    Ok((tiles, layout))
}
