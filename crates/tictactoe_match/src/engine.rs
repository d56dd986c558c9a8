//! The match engine: board, turn order and win/draw detection.

use crate::action::Move;
use crate::board::{Board, BoardError, CLASSIC_SIDE, Coord, MAX_SIDE};
use crate::config::{MatchConfig, TurnPolicy};
use crate::event::{MatchEvent, MatchObserver};
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::player::{Player, PlayerId, PlayerRole};
use crate::rules;
use crate::state::MatchState;
use tracing::{debug, info, instrument, warn};

/// Errors that can occur when setting up a match.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatchError {
    /// Both seats were given the same player.
    #[display("Both seats hold player {_0}")]
    DuplicatePlayer(#[error(not(source))] PlayerId),
    /// A board needs at least one cell.
    #[display("Board side must be at least 1")]
    EmptyBoard,
    /// The requested side exceeds [`MAX_SIDE`].
    #[display("Board side {} exceeds the maximum of {}", _0, MAX_SIDE)]
    BoardTooLarge(#[error(not(source))] usize),
    /// A player's role tag does not match the seat they were given.
    #[display("Seat {expected} was given a {found} player")]
    RoleMismatch {
        /// Role of the seat.
        expected: PlayerRole,
        /// Role carried by the player.
        found: PlayerRole,
    },
}

/// Owns a single match between two players.
///
/// The engine is single-threaded and synchronous. Every operation runs to
/// completion, and observer callbacks fire before the operation returns.
pub struct MatchEngine {
    pub(crate) first: Player,
    pub(crate) second: Player,
    pub(crate) turn: PlayerRole,
    pub(crate) board: Board,
    pub(crate) state: MatchState,
    pub(crate) history: Vec<Move>,
    pub(crate) turn_policy: TurnPolicy,
    observer: Option<Box<dyn MatchObserver>>,
}

impl MatchEngine {
    /// Creates a classic 3x3 match.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicatePlayer`] if both players share an id and
    /// [`MatchError::RoleMismatch`] if a player's role differs from its seat.
    pub fn new(first: Player, second: Player) -> Result<Self, MatchError> {
        Self::with_side(first, second, CLASSIC_SIDE)
    }

    /// Creates a match on an N x N board.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicatePlayer`] if both players share an id,
    /// [`MatchError::RoleMismatch`] if a player's role differs from its seat,
    /// [`MatchError::EmptyBoard`] if `side` is zero and
    /// [`MatchError::BoardTooLarge`] if `side` exceeds [`MAX_SIDE`].
    #[instrument(skip(first, second), fields(first = %first, second = %second))]
    pub fn with_side(first: Player, second: Player, side: usize) -> Result<Self, MatchError> {
        if first == second {
            warn!("Refusing to seat the same player twice");
            return Err(MatchError::DuplicatePlayer(first.id()));
        }
        for (seat, player) in [(PlayerRole::First, &first), (PlayerRole::Second, &second)] {
            if player.role() != seat {
                warn!(%seat, found = %player.role(), "Player seated against its role");
                return Err(MatchError::RoleMismatch {
                    expected: seat,
                    found: player.role(),
                });
            }
        }
        if side == 0 {
            return Err(MatchError::EmptyBoard);
        }
        if side > MAX_SIDE {
            return Err(MatchError::BoardTooLarge(side));
        }

        info!("Creating match");
        Ok(Self {
            first,
            second,
            turn: PlayerRole::First,
            board: Board::new(side),
            state: MatchState::InProgress,
            history: Vec::new(),
            turn_policy: TurnPolicy::default(),
            observer: None,
        })
    }

    /// Creates a match with two fresh players described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyBoard`] or [`MatchError::BoardTooLarge`] if
    /// the configured side is out of range.
    #[instrument(skip(config), fields(side = config.side()))]
    pub fn from_config(config: &MatchConfig) -> Result<Self, MatchError> {
        let first = Player::named(PlayerRole::First, config.first_name().as_str());
        let second = Player::named(PlayerRole::Second, config.second_name().as_str());
        let engine = Self::with_side(first, second, *config.side())?;
        Ok(engine.with_turn_policy(*config.turn_policy()))
    }

    /// Returns the engine using the given turn-ownership policy.
    pub fn with_turn_policy(mut self, turn_policy: TurnPolicy) -> Self {
        self.turn_policy = turn_policy;
        self
    }

    /// Registers the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl MatchObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer, returning it if one was registered.
    pub fn clear_observer(&mut self) -> Option<Box<dyn MatchObserver>> {
        self.observer.take()
    }

    /// Starts a new match: empty board, first player up, in progress.
    ///
    /// The observer is told the first player is up.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        self.board = Board::new(self.board.side());
        self.history.clear();
        self.turn = PlayerRole::First;
        self.state = MatchState::InProgress;
        self.check_invariants();

        info!(first = %self.first, "New match started");
        let up = MatchEvent::TurnChanged(self.first.clone());
        self.dispatch(vec![up]);
    }

    /// Attempts to place `player` at `(row, col)`.
    ///
    /// Returns the events emitted by this call, in order. The same events are
    /// delivered to the observer. Coordinates off the board are ignored and
    /// produce no events.
    #[instrument(skip(self, player), fields(player = %player))]
    pub fn attempt_move(&mut self, player: &Player, row: usize, col: usize) -> Vec<MatchEvent> {
        if !self.board.contains(row, col) {
            debug!(side = self.board.side(), "Ignoring move off the board");
            return Vec::new();
        }

        if self.state.is_terminal() {
            warn!(state = %self.state, "Move attempted after match ended");
            return self.dispatch(vec![MatchEvent::MoveAfterMatchEnded(self.state.clone())]);
        }

        if !self.board.is_empty_at(row, col) {
            warn!("Move onto an occupied cell");
            return self.dispatch(vec![MatchEvent::InvalidMove { row, col }]);
        }

        if self.turn_policy == TurnPolicy::Strict && player != self.current_turn() {
            warn!(expected = %self.current_turn(), "Move out of turn");
            let event = MatchEvent::OutOfTurn {
                attempted: player.clone(),
                expected: self.current_turn().clone(),
            };
            return self.dispatch(vec![event]);
        }

        match self.board.occupy(row, col, player.clone()) {
            Ok(()) => {}
            Err(BoardError::Occupied { row, col }) => {
                return self.dispatch(vec![MatchEvent::InvalidMove { row, col }]);
            }
            Err(e @ BoardError::OutOfRange { .. }) => {
                debug!(error = %e, "Ignoring move off the board");
                return Vec::new();
            }
        }
        self.history.push(Move::new(player.clone(), Coord::new(row, col)));

        self.turn = self.turn.other();
        let mut events = vec![MatchEvent::TurnChanged(self.current_turn().clone())];

        self.state = rules::evaluate(&self.board);
        events.push(MatchEvent::MatchStatusChanged(self.state.clone()));

        debug!(moves = self.history.len(), board = %self.board, "Move accepted");
        if self.state.is_terminal() {
            info!(state = %self.state, moves = self.history.len(), "Match concluded");
        }
        self.check_invariants();

        self.dispatch(events)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who owns the next move.
    pub fn current_turn(&self) -> &Player {
        self.player_for(self.turn)
    }

    /// Returns the match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns the first player.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// Returns the second player.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// Returns the player seated in `role`.
    pub fn player_for(&self, role: PlayerRole) -> &Player {
        match role {
            PlayerRole::First => &self.first,
            PlayerRole::Second => &self.second,
        }
    }

    /// Returns the accepted moves of the current match, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the turn-ownership policy.
    pub fn turn_policy(&self) -> TurnPolicy {
        self.turn_policy
    }

    /// Empty cells, or nothing once the match has ended.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.state.is_terminal() {
            Vec::new()
        } else {
            self.board.empty_coords()
        }
    }

    fn dispatch(&mut self, events: Vec<MatchEvent>) -> Vec<MatchEvent> {
        if let Some(observer) = self.observer.as_mut() {
            for event in &events {
                observer.on_event(event);
            }
        }
        events
    }

    fn check_invariants(&self) {
        debug_assert!(
            MatchInvariants::check_all(self).is_ok(),
            "Match invariants violated: {:?}",
            MatchInvariants::check_all(self)
        );
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("turn", &self.turn)
            .field("board", &self.board)
            .field("state", &self.state)
            .field("history", &self.history)
            .field("turn_policy", &self.turn_policy)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
