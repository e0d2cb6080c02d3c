//! Serializable records for boards and players.
//!
//! Records are plain serde structs with camelCase field names, meant for
//! whatever storage a collaborator chooses. Converting a record back goes
//! through the validated constructors, and a board record is checked
//! against a freshly generated topology, so a record can never smuggle in
//! an inconsistent tile graph.

mod board;
mod player;

pub use board::{ActionRecord, BoardRecord, DimensionsRecord, TileRecord};
pub use player::{LadderPlayerRecord, LudoPlayerRecord};
