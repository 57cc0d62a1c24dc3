use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player registered for one game. Immutable while validating or diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: PlayerId,
    pub name: String,
    /// Position abbreviations the player prefers ("GK", "CM", ...).
    #[serde(default)]
    pub preferred_positions: Vec<String>,
}

impl RosterPlayer {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), preferred_positions: Vec::new() }
    }

    pub fn with_preferred(mut self, positions: &[&str]) -> Self {
        self.preferred_positions = positions.iter().map(|p| p.to_string()).collect();
        self
    }

    /// True when the player has no stated preference or lists `label`.
    pub fn prefers(&self, label: &str) -> bool {
        self.preferred_positions.is_empty()
            || self.preferred_positions.iter().any(|p| p.eq_ignore_ascii_case(label))
    }
}

/// Display label for an id that is not on the roster.
pub fn fallback_name(id: PlayerId) -> String {
    format!("Player #{id}")
}

/// The players eligible for one game, in the caller's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<RosterPlayer>,
}

impl Roster {
    pub fn new(players: Vec<RosterPlayer>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[RosterPlayer] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&RosterPlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    /// Best-effort name lookup; unknown ids get [`fallback_name`].
    pub fn name_of(&self, id: PlayerId) -> String {
        self.get(id).map(|p| p.name.clone()).unwrap_or_else(|| fallback_name(id))
    }
}

impl FromIterator<RosterPlayer> for Roster {
    fn from_iter<I: IntoIterator<Item = RosterPlayer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
