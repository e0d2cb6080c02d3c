//! # tile-race
//!
//! Board generation and a turn engine for two tile-race games: the ladder
//! game (chutes and ladders) on a linear zigzag board, and Ludo on a
//! four-arm cross board.
//!
//! ## Design Principles
//!
//! 1. **Boards are values**: generation is a pure function from a few
//!    numbers to a tile graph. Regenerating yields a new [`Board`]; tiles
//!    live in an `im::OrdMap`, so versions share structure.
//!
//! 2. **Positions are ids**: players and tokens hold [`TileId`]s into the
//!    shared board, never copies of tiles.
//!
//! 3. **Validate at the boundary**: every constructor checks its input and
//!    returns a [`GameError`]. Inside the engine, invariants hold.
//!
//! 4. **Ordered events**: each turn emits [`GameEvent`]s in a fixed order
//!    to every subscribed [`GameObserver`].
//!
//! ## Modules
//!
//! - `core`: seats, colours, RNG, configuration and errors
//! - `tiles`: tile ids, coordinates, tiles and tile actions
//! - `board`: the board value and its linear and cross generators
//! - `dice`: dice
//! - `players`: profiles, ladder players, Ludo players and tokens
//! - `events`: game events and observers
//! - `game`: the turn engine and both rule sets
//! - `record`: serde records for boards and players
//!
//! ## Example
//!
//! ```
//! use tile_race::{
//!     Board, BoardInfo, Color, GameConfig, LadderGame, LadderPlayer, PlayerProfile, TokenType,
//! };
//!
//! let board = Board::linear(BoardInfo::new("Garden", "A quiet board").unwrap(), 9, 10).unwrap();
//! let players = ["Ann", "Ben"]
//!     .iter()
//!     .map(|name| {
//!         let profile = PlayerProfile::new(*name, Color::rgb(10, 20, 30), false).unwrap();
//!         LadderPlayer::new(profile, TokenType::Circle)
//!     })
//!     .collect();
//!
//! let mut game = LadderGame::new(board, players, GameConfig::new().with_seed(42)).unwrap();
//! let report = game.perform_turn().unwrap();
//! assert_eq!(report.events.len(), 3);
//! ```

pub mod board;
pub mod core;
pub mod dice;
pub mod events;
pub mod game;
pub mod players;
pub mod record;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Color, GameConfig, GameError, GameRng, GameRngState, PlayerId, PlayerMap, Result,
    ValidationError,
};

pub use crate::tiles::{Coordinates, Tile, TileAction, TileId};

pub use crate::board::{ArmLayout, Board, BoardDimensions, BoardInfo, CrossLayout, TileKind};

pub use crate::dice::{Dice, Die};

pub use crate::players::{
    LadderPlayer, LudoPlayer, Piece, PlayerProfile, Token, TokenId, TokenStatus, TokenType,
};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::game::{BoardGame, LadderGame, LadderRules, LudoGame, LudoRules, Rules, TurnReport};

pub use crate::record::{BoardRecord, LadderPlayerRecord, LudoPlayerRecord};
