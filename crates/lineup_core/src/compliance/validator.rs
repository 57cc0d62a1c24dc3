//! Fair-play compliance check for a 4-quarter lineup.
//!
//! Rules, all evaluated in one pass (no early exit):
//! - minimum participation: every eligible player plays at least 3 quarters
//! - 3/4 rule: nobody plays all 4 quarters while anyone is still under 3
//! - goalkeeper ceiling: 7v7 max 2, 9v9 max 3, 11v11 unrestricted
//!
//! Ids that are not on the roster are reported, never silently dropped.
//! A lineup without exactly 4 quarters is rejected as a whole.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use super::tally::{tally_participation, Participation, ParticipationTally};
use super::violation::{ComplianceReport, Violation, ViolationRule};
use crate::config::FairPlayRules;
use crate::models::{GameFormat, PlayerId, QuarterAssignment, Roster, QUARTERS};

/// Validates lineups against a fixed set of [`FairPlayRules`].
#[derive(Debug, Clone, Default)]
pub struct LineupValidator {
    rules: FairPlayRules,
}

impl LineupValidator {
    pub fn new(rules: FairPlayRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &FairPlayRules {
        &self.rules
    }

    pub fn validate(
        &self,
        quarters: &[QuarterAssignment],
        roster: &Roster,
        format: GameFormat,
    ) -> ComplianceReport {
        self.validate_with_availability(quarters, roster, format, &[])
    }

    /// Like [`validate`](Self::validate), with per-quarter absent/injured sets.
    /// An absent quarter never counts toward a player's minimum; the minimum
    /// shrinks to the quarters the player was actually available for.
    pub fn validate_with_availability(
        &self,
        quarters: &[QuarterAssignment],
        roster: &Roster,
        format: GameFormat,
        absences: &[BTreeSet<PlayerId>],
    ) -> ComplianceReport {
        if quarters.len() != QUARTERS {
            warn!(found = quarters.len(), "lineup rejected: wrong quarter count");
            return ComplianceReport::from_violations(vec![quarter_count_violation(quarters.len())]);
        }

        let tally = tally_participation(quarters, roster, absences);
        let name_of = |id: PlayerId| roster.name_of(id);

        let mut violations = Vec::new();
        violations.extend(self.unknown_players(&tally, &name_of));
        violations.extend(self.minimum_quarters(&tally, &name_of));
        violations.extend(self.full_game_before_minimum(&tally, &name_of));
        violations.extend(self.goalkeeper_ceiling(&tally, format, &name_of));

        let report = ComplianceReport::from_violations(violations);
        debug!(
            format = %format,
            roster = roster.len(),
            violations = report.violations.len(),
            "lineup validated"
        );
        if !report.is_valid {
            info!(count = report.violations.len(), "lineup rejected by fair-play rules");
        }
        report
    }

    fn required_quarters(&self, participation: &Participation) -> u8 {
        self.rules.min_quarters.min(participation.available_quarters())
    }

    fn is_short(&self, participation: &Participation) -> bool {
        participation.quarters_played < self.required_quarters(participation)
    }

    fn unknown_players(
        &self,
        tally: &ParticipationTally,
        name_of: &impl Fn(PlayerId) -> String,
    ) -> Vec<Violation> {
        tally
            .unknown()
            .map(|(id, p)| Violation {
                player_id: id,
                player_name: name_of(id),
                quarters_played: p.quarters_played,
                rule: ViolationRule::UnknownPlayer,
                issue: "is not on the roster for this game".to_string(),
            })
            .collect()
    }

    fn minimum_quarters(
        &self,
        tally: &ParticipationTally,
        name_of: &impl Fn(PlayerId) -> String,
    ) -> Vec<Violation> {
        tally
            .rostered()
            .filter(|(_, p)| self.is_short(p))
            .map(|(id, p)| Violation {
                player_id: id,
                player_name: name_of(id),
                quarters_played: p.quarters_played,
                rule: ViolationRule::MinimumQuarters,
                issue: format!(
                    "plays {}, minimum {} required",
                    quarters_text(p.quarters_played),
                    self.required_quarters(p)
                ),
            })
            .collect()
    }

    /// Flags the over-played players, not the under-played ones.
    fn full_game_before_minimum(
        &self,
        tally: &ParticipationTally,
        name_of: &impl Fn(PlayerId) -> String,
    ) -> Vec<Violation> {
        let anyone_short = tally.rostered().any(|(_, p)| self.is_short(p));
        if !anyone_short {
            return Vec::new();
        }

        tally
            .rostered()
            .filter(|(_, p)| p.played_full_game())
            .map(|(id, p)| Violation {
                player_id: id,
                player_name: name_of(id),
                quarters_played: p.quarters_played,
                rule: ViolationRule::FullGameBeforeMinimum,
                issue: format!(
                    "plays all {QUARTERS} quarters before every player has reached {}",
                    self.rules.min_quarters
                ),
            })
            .collect()
    }

    fn goalkeeper_ceiling(
        &self,
        tally: &ParticipationTally,
        format: GameFormat,
        name_of: &impl Fn(PlayerId) -> String,
    ) -> Vec<Violation> {
        let ceiling = self.rules.goalkeeper_ceiling(format);
        if usize::from(ceiling) >= QUARTERS {
            return Vec::new();
        }

        tally
            .rostered()
            .filter(|(_, p)| p.goalkeeper_quarters > ceiling)
            .map(|(id, p)| Violation {
                player_id: id,
                player_name: name_of(id),
                quarters_played: p.quarters_played,
                rule: ViolationRule::GoalkeeperCeiling,
                issue: format!(
                    "plays goalkeeper {} (maximum {} for {})",
                    quarters_text(p.goalkeeper_quarters),
                    ceiling,
                    format
                ),
            })
            .collect()
    }
}

fn quarters_text(n: u8) -> String {
    match n {
        1 => "1 quarter".to_string(),
        n => format!("{n} quarters"),
    }
}

/// Lineup-level violation; `player_id` 0 never names a roster player.
fn quarter_count_violation(found: usize) -> Violation {
    Violation {
        player_id: 0,
        player_name: "Lineup".to_string(),
        quarters_played: 0,
        rule: ViolationRule::QuarterCount,
        issue: format!("has {found} quarters, exactly {QUARTERS} required"),
    }
}

/// League-rule validation of a 4-quarter lineup.
pub fn validate_lineup(
    quarters: &[QuarterAssignment],
    roster: &Roster,
    format: GameFormat,
) -> ComplianceReport {
    LineupValidator::default().validate(quarters, roster, format)
}
