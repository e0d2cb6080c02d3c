//! Board records.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardDimensions, BoardInfo};
use crate::core::{Color, GameError, Result, ValidationError};
use crate::tiles::{Coordinates, Tile, TileAction, TileId};

/// A tile action as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// `ladder`, `slide` or `portal`.
    pub identifier: String,
    pub destination_tile_id: u32,
    pub description: String,
}

impl From<&TileAction> for ActionRecord {
    fn from(action: &TileAction) -> Self {
        Self {
            identifier: action.identifier().to_string(),
            destination_tile_id: action.destination().0,
            description: action.description().to_string(),
        }
    }
}

impl TryFrom<&ActionRecord> for TileAction {
    type Error = GameError;

    fn try_from(record: &ActionRecord) -> Result<Self> {
        TileAction::from_identifier(
            &record.identifier,
            TileId(record.destination_tile_id),
            record.description.clone(),
        )
    }
}

/// A tile as stored. `successorId` 0 means "no successor".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub id: u32,
    /// `[row, col]`.
    pub coordinates: [i32; 2],
    pub successor_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionRecord>,
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        let c = tile.coordinates();
        Self {
            id: tile.id().0,
            coordinates: [c.row, c.col],
            successor_id: tile.successor().map_or(0, TileId::raw),
            action: tile.action().map(ActionRecord::from),
        }
    }
}

/// Generation parameters as stored: `{rows, columns}` or `{boardSize}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionsRecord {
    Grid {
        rows: u32,
        columns: u32,
    },
    Cross {
        #[serde(rename = "boardSize")]
        board_size: u32,
    },
}

impl From<BoardDimensions> for DimensionsRecord {
    fn from(dimensions: BoardDimensions) -> Self {
        match dimensions {
            BoardDimensions::Grid { rows, columns } => DimensionsRecord::Grid { rows, columns },
            BoardDimensions::Cross { board_size } => DimensionsRecord::Cross { board_size },
        }
    }
}

impl From<DimensionsRecord> for BoardDimensions {
    fn from(record: DimensionsRecord) -> Self {
        match record {
            DimensionsRecord::Grid { rows, columns } => BoardDimensions::Grid { rows, columns },
            DimensionsRecord::Cross { board_size } => BoardDimensions::Cross { board_size },
        }
    }
}

/// A whole board as stored.
///
/// `colors` is only present for cross boards and `pattern` only for linear
/// ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub dimensions: DimensionsRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<Color>,
    pub tiles: Vec<TileRecord>,
}

impl From<&Board> for BoardRecord {
    fn from(board: &Board) -> Self {
        Self {
            name: board.name().to_string(),
            description: board.description().to_string(),
            background: board.background().to_string(),
            pattern: board.pattern().map(str::to_string),
            dimensions: board.dimensions().into(),
            colors: board
                .cross_layout()
                .map(|layout| layout.colors().to_vec())
                .unwrap_or_default(),
            tiles: board.tiles().map(TileRecord::from).collect(),
        }
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = GameError;

    /// Regenerate the topology from the dimensions, check every stored tile
    /// against it, then attach the stored actions.
    fn try_from(record: BoardRecord) -> Result<Self> {
        let info =
            BoardInfo::new(record.name, record.description)?.with_background(record.background);
        let mut board = match BoardDimensions::from(record.dimensions) {
            BoardDimensions::Grid { rows, columns } => Board::linear(info, rows, columns)?,
            BoardDimensions::Cross { board_size } => {
                Board::cross(info, board_size, &record.colors)?
            }
        };
        if let Some(pattern) = record.pattern {
            board = board.with_pattern(pattern)?;
        }

        let expected = board.tiles().count();
        if record.tiles.len() != expected {
            return Err(ValidationError::new(
                "tiles",
                format!("{} tiles", record.tiles.len()),
                format!("{} tiles", expected),
            )
            .into());
        }

        let mut seen = FxHashSet::default();
        for stored in &record.tiles {
            if !seen.insert(stored.id) {
                let value = format!("tile {}", stored.id);
                return Err(ValidationError::new("tiles", value, "each tile id once").into());
            }
            check_tile(&board, stored)?;
        }
        for stored in &record.tiles {
            if let Some(action) = &stored.action {
                board.set_action(TileId(stored.id), TileAction::try_from(action)?)?;
            }
        }
        Ok(board)
    }
}

fn check_tile(board: &Board, stored: &TileRecord) -> Result<()> {
    let tile = board.tile(TileId(stored.id))?;
    let coordinates = Coordinates::new(stored.coordinates[0], stored.coordinates[1]);
    let successor = tile.successor().map_or(0, TileId::raw);
    if tile.coordinates() != coordinates || successor != stored.successor_id {
        return Err(ValidationError::new(
            "tiles",
            format!("tile {} at {} -> {}", stored.id, coordinates, stored.successor_id),
            format!("tile {} at {} -> {}", stored.id, tile.coordinates(), successor),
        )
        .into());
    }
    Ok(())
}
