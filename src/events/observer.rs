//! Observer trait and a recording observer.

use std::cell::RefCell;
use std::rc::Rc;

use super::GameEvent;

/// Receives the engine's events in emission order.
///
/// Observers cannot fail and cannot veto anything; they run synchronously
/// inside the turn that produced the event. Any `FnMut(&GameEvent)` closure
/// is an observer.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Records every event it receives.
///
/// Clones share the same buffer, so one clone can be subscribed to an
/// engine while another is kept to inspect the history.
///
/// ```
/// use tile_race::events::{EventLog, GameEvent, GameObserver};
///
/// let log = EventLog::new();
/// let mut subscribed = log.clone();
/// subscribed.on_event(&GameEvent::RoundIncremented { round: 2 });
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Names of the recorded events, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(GameEvent::name).collect()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
