//! Player identities.
//!
//! A player is compared by its generated id only. Two players with the same
//! role and name are still different players unless they share an id.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::instrument;
use uuid::Uuid;

/// Opaque, comparable identifier for a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Seat a player occupies in a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    /// Moves first at the start of every match.
    #[strum(serialize = "player1")]
    First,
    /// Moves second.
    #[strum(serialize = "player2")]
    Second,
}

impl PlayerRole {
    /// Returns the opposite seat.
    pub fn other(self) -> Self {
        match self {
            PlayerRole::First => PlayerRole::Second,
            PlayerRole::Second => PlayerRole::First,
        }
    }

    /// Board mark used when rendering this seat.
    pub fn mark(self) -> char {
        match self {
            PlayerRole::First => 'X',
            PlayerRole::Second => 'O',
        }
    }
}

/// A participant in a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    role: PlayerRole,
    name: String,
}

impl Player {
    /// Creates a player with a fresh id, named after its role.
    #[instrument]
    pub fn new(role: PlayerRole) -> Self {
        Self::named(role, role.to_string())
    }

    /// Creates a player with a fresh id and the given display name.
    #[instrument(skip(name))]
    pub fn named(role: PlayerRole, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::generate(),
            role,
            name: name.into(),
        }
    }

    /// Returns the player's id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's seat.
    pub fn role(&self) -> PlayerRole {
        self.role
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_by_id() {
        let a = Player::named(PlayerRole::First, "Sami");
        let b = Player::named(PlayerRole::First, "Sami");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_rename_keeps_identity() {
        let a = Player::new(PlayerRole::Second);
        let mut renamed = a.clone();
        renamed.name = "someone else".to_string();
        renamed.role = PlayerRole::First;
        assert_eq!(a, renamed);

        let set: HashSet<Player> = [a, renamed].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_default_names_follow_role() {
        assert_eq!(Player::new(PlayerRole::First).name(), "player1");
        assert_eq!(Player::new(PlayerRole::Second).name(), "player2");
    }

    #[test]
    fn test_role_other() {
        use strum::IntoEnumIterator;

        for role in PlayerRole::iter() {
            assert_ne!(role.other(), role);
            assert_eq!(role.other().other(), role);
        }
        assert_eq!(PlayerRole::First.other(), PlayerRole::Second);
    }
}
