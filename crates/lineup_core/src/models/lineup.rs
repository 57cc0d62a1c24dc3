use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{GameFormat, PlayerId, PositionNumber, QuarterNumber, Roster};

/// One (position, player) pair as entered by a coach or returned by the
/// advice collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub position: PositionNumber,
    pub player_id: PlayerId,
}

impl Assignment {
    pub fn new(position: PositionNumber, player_id: PlayerId) -> Self {
        Self { position, player_id }
    }
}

/// Position → player mapping for a single quarter.
///
/// Expected to be injective (one position per player). [`crate::contracts`]
/// guards that at the boundary; this type does not re-check it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuarterAssignment {
    slots: BTreeMap<PositionNumber, PlayerId>,
}

impl QuarterAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later pairs overwrite earlier ones on the same position.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (PositionNumber, PlayerId)>,
    {
        Self { slots: pairs.into_iter().collect() }
    }

    pub fn insert(&mut self, position: PositionNumber, player_id: PlayerId) -> Option<PlayerId> {
        self.slots.insert(position, player_id)
    }

    pub fn player_at(&self, position: PositionNumber) -> Option<PlayerId> {
        self.slots.get(&position).copied()
    }

    pub fn position_of(&self, player_id: PlayerId) -> Option<PositionNumber> {
        self.slots.iter().find(|(_, &p)| p == player_id).map(|(&pos, _)| pos)
    }

    pub fn contains_player(&self, player_id: PlayerId) -> bool {
        self.position_of(player_id).is_some()
    }

    pub fn positions(&self) -> impl Iterator<Item = PositionNumber> + '_ {
        self.slots.keys().copied()
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.slots.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PositionNumber, PlayerId)> + '_ {
        self.slots.iter().map(|(&pos, &p)| (pos, p))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl From<&[Assignment]> for QuarterAssignment {
    fn from(pairs: &[Assignment]) -> Self {
        Self::from_pairs(pairs.iter().map(|a| (a.position, a.player_id)))
    }
}

/// One quarter of a stored or proposed lineup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterPlan {
    pub assignments: Vec<Assignment>,
    /// Players explicitly sitting out. `None` means "everyone else on the roster".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench: Option<BTreeSet<PlayerId>>,
    /// Absent/injured players: ineligible for this quarter, never benched.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub absent: BTreeSet<PlayerId>,
    /// Completed/locked quarters must not be altered by suggestions.
    #[serde(default)]
    pub completed: bool,
    /// Formation name chosen for this quarter (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<String>,
}

impl QuarterPlan {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (PositionNumber, PlayerId)>,
    {
        Self {
            assignments: pairs.into_iter().map(|(pos, p)| Assignment::new(pos, p)).collect(),
            ..Default::default()
        }
    }

    pub fn assignment(&self) -> QuarterAssignment {
        QuarterAssignment::from(self.assignments.as_slice())
    }

    /// Explicit bench, or roster minus field players minus absent players.
    pub fn bench_or_derived(&self, roster: &Roster) -> BTreeSet<PlayerId> {
        if let Some(bench) = &self.bench {
            return bench.clone();
        }
        let on_field: BTreeSet<PlayerId> = self.assignments.iter().map(|a| a.player_id).collect();
        roster
            .ids()
            .filter(|id| !on_field.contains(id) && !self.absent.contains(id))
            .collect()
    }

    /// Same players in the same positions and same absences; ignores order.
    pub fn same_lineup(&self, other: &QuarterPlan) -> bool {
        self.assignment() == other.assignment() && self.absent == other.absent
    }
}

/// A full-game lineup: format plus one plan per quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupProposal {
    pub format: GameFormat,
    pub quarters: Vec<QuarterPlan>,
}

impl LineupProposal {
    pub fn new(format: GameFormat, quarters: Vec<QuarterPlan>) -> Self {
        Self { format, quarters }
    }

    /// 1-based quarter lookup.
    pub fn quarter(&self, quarter: QuarterNumber) -> Option<&QuarterPlan> {
        usize::from(quarter).checked_sub(1).and_then(|i| self.quarters.get(i))
    }

    pub fn assignments(&self) -> Vec<QuarterAssignment> {
        self.quarters.iter().map(QuarterPlan::assignment).collect()
    }

    pub fn absences(&self) -> Vec<BTreeSet<PlayerId>> {
        self.quarters.iter().map(|q| q.absent.clone()).collect()
    }

    pub fn locked_quarters(&self) -> impl Iterator<Item = QuarterNumber> + '_ {
        self.quarters
            .iter()
            .enumerate()
            .filter(|(_, q)| q.completed)
            .map(|(i, _)| (i + 1) as QuarterNumber)
    }
}
