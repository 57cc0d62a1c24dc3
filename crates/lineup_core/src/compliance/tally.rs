//! Per-player participation counts, built as a pure fold over the quarters.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, QuarterAssignment, Roster, GOALKEEPER_POSITION, QUARTERS};

/// How much of the game one player was given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    pub quarters_played: u8,
    pub goalkeeper_quarters: u8,
    pub quarters_absent: u8,
    /// False for ids that appear in assignments but not on the roster.
    pub on_roster: bool,
}

impl Participation {
    fn rostered() -> Self {
        Self { on_roster: true, ..Default::default() }
    }

    /// Quarters the player could have been fielded in.
    pub fn available_quarters(&self) -> u8 {
        (QUARTERS as u8).saturating_sub(self.quarters_absent)
    }

    pub fn played_full_game(&self) -> bool {
        usize::from(self.quarters_played) >= QUARTERS
    }
}

/// Immutable result of [`tally_participation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipationTally {
    counts: BTreeMap<PlayerId, Participation>,
}

impl ParticipationTally {
    pub fn get(&self, id: PlayerId) -> Option<&Participation> {
        self.counts.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Participation)> + '_ {
        self.counts.iter().map(|(&id, p)| (id, p))
    }

    pub fn rostered(&self) -> impl Iterator<Item = (PlayerId, &Participation)> + '_ {
        self.iter().filter(|(_, p)| p.on_roster)
    }

    pub fn unknown(&self) -> impl Iterator<Item = (PlayerId, &Participation)> + '_ {
        self.iter().filter(|(_, p)| !p.on_roster)
    }
}

/// Counts quarters played, goalkeeper quarters and absences for every roster
/// player (zero-initialised, so unselected players still appear) plus any
/// unknown id found in the assignments.
///
/// `absences[i]` is the absent/injured set of quarter `i + 1`; missing
/// entries mean nobody was absent.
pub fn tally_participation(
    quarters: &[QuarterAssignment],
    roster: &Roster,
    absences: &[BTreeSet<PlayerId>],
) -> ParticipationTally {
    let seeded: BTreeMap<PlayerId, Participation> =
        roster.ids().map(|id| (id, Participation::rostered())).collect();

    let with_absences = absences.iter().flatten().fold(seeded, |mut acc, &id| {
        if let Some(entry) = acc.get_mut(&id) {
            entry.quarters_absent = entry.quarters_absent.saturating_add(1);
        }
        acc
    });

    let counts = quarters
        .iter()
        .flat_map(|q| q.iter())
        .fold(with_absences, |mut acc, (position, id)| {
            let entry = acc.entry(id).or_default();
            entry.quarters_played = entry.quarters_played.saturating_add(1);
            if position == GOALKEEPER_POSITION {
                entry.goalkeeper_quarters = entry.goalkeeper_quarters.saturating_add(1);
            }
            acc
        });

    ParticipationTally { counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RosterPlayer;

    #[test]
    fn test_unselected_players_are_counted_as_zero() {
        let roster: Roster =
            vec![RosterPlayer::new(1, "A"), RosterPlayer::new(2, "B")].into_iter().collect();
        let quarters = vec![QuarterAssignment::from_pairs([(1, 1)]); 4];

        let tally = tally_participation(&quarters, &roster, &[]);
        let a = tally.get(1).unwrap();
        assert_eq!(a.quarters_played, 4);
        assert_eq!(a.goalkeeper_quarters, 4);
        assert_eq!(tally.get(2).unwrap().quarters_played, 0);
        assert!(tally.get(2).unwrap().on_roster);
    }

    #[test]
    fn test_unknown_ids_are_kept_but_flagged() {
        let roster: Roster = vec![RosterPlayer::new(1, "A")].into_iter().collect();
        let quarters = vec![QuarterAssignment::from_pairs([(2, 42)])];

        let tally = tally_participation(&quarters, &roster, &[]);
        let unknown: Vec<_> = tally.unknown().map(|(id, _)| id).collect();
        assert_eq!(unknown, vec![42]);
        assert_eq!(tally.get(42).unwrap().quarters_played, 1);
    }

    #[test]
    fn test_absences_reduce_available_quarters() {
        let roster: Roster = vec![RosterPlayer::new(1, "A")].into_iter().collect();
        let absences = vec![BTreeSet::from([1]), BTreeSet::new(), BTreeSet::from([1])];

        let tally = tally_participation(&[], &roster, &absences);
        let a = tally.get(1).unwrap();
        assert_eq!(a.quarters_absent, 2);
        assert_eq!(a.available_quarters(), 2);
    }
}
