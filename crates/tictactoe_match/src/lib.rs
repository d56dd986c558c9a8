//! Tic-tac-toe match engine.
//!
//! A [`MatchEngine`] owns an N x N [`Board`], two [`Player`]s, the turn
//! order and the [`MatchState`]. Moves go in through
//! [`MatchEngine::attempt_move`]; what happened comes back out as an ordered
//! list of [`MatchEvent`]s, which are also pushed to a single registered
//! [`MatchObserver`].
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{MatchEngine, MatchState, Player, PlayerRole};
//!
//! let x = Player::new(PlayerRole::First);
//! let o = Player::new(PlayerRole::Second);
//! let mut engine = MatchEngine::new(x.clone(), o.clone()).unwrap();
//!
//! for (player, row, col) in [(&x, 0, 0), (&o, 1, 0), (&x, 0, 1), (&o, 1, 1), (&x, 0, 2)] {
//!     engine.attempt_move(player, row, col);
//! }
//! assert_eq!(engine.state(), &MatchState::Won(x));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod engine;
mod event;
pub mod invariants;
mod player;
pub mod rules;
mod state;

pub use action::Move;
pub use board::{Board, BoardError, CLASSIC_SIDE, Cell, Coord, Line, LineKind, MAX_SIDE, Occupancy};
pub use config::{ConfigError, MatchConfig, TurnPolicy};
pub use engine::{MatchEngine, MatchError};
pub use event::{EventLog, MatchEvent, MatchObserver};
pub use player::{Player, PlayerId, PlayerRole};
pub use state::MatchState;
