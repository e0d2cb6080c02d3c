//! Game events and the observer interface.
//!
//! The engine reports everything that happens during a turn as a
//! [`GameEvent`]. Collaborators (renderers, loggers, replays) subscribe a
//! [`GameObserver`] to the engine and receive the events in order:
//!
//! 1. dice
//! 2. movement (moves, releases, captures, finishes or a skip)
//! 3. tile action
//! 4. round increment
//! 5. current-player change
//! 6. game finish
//!
//! [`EventLog`] is a ready-made observer that records what it sees.

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver};
