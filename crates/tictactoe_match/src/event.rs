//! Match notifications and the observer seam.
//!
//! Every call into the engine produces an ordered list of [`MatchEvent`]s.
//! The same events are pushed, in the same order, to the single registered
//! [`MatchObserver`].

use crate::player::Player;
use crate::state::MatchState;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Something that happened in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MatchEvent {
    /// Match state after an accepted move.
    #[display("match status: {_0}")]
    MatchStatusChanged(MatchState),
    /// The player who owns the next move.
    #[display("{_0} is up")]
    TurnChanged(Player),
    /// A move targeted a cell that is already occupied.
    #[display("invalid move at ({row}, {col})")]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// A move was attempted after the match ended.
    #[display("move attempted after match ended ({_0})")]
    MoveAfterMatchEnded(MatchState),
    /// Under the strict turn policy, a player moved out of turn.
    #[display("{attempted} moved out of turn, expected {expected}")]
    OutOfTurn {
        /// Player who attempted the move.
        attempted: Player,
        /// Player who owns the turn.
        expected: Player,
    },
}

/// Receiver for match notifications.
///
/// Callbacks run synchronously inside the engine call that produced them.
pub trait MatchObserver {
    /// Handles one event.
    fn on_event(&mut self, event: &MatchEvent);
}

impl<F> MatchObserver for F
where
    F: FnMut(&MatchEvent),
{
    fn on_event(&mut self, event: &MatchEvent) {
        self(event)
    }
}

/// Observer that records every event it sees.
///
/// Clones share the same log, so one clone can be handed to the engine while
/// the caller keeps another to inspect.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<MatchEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<MatchEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the recorded events.
    pub fn drain(&self) -> Vec<MatchEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl MatchObserver for EventLog {
    fn on_event(&mut self, event: &MatchEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
