//! Playing-time overview shown next to the compliance report.

use serde::{Deserialize, Serialize};

use crate::models::{LineupProposal, PlayerId, Roster, GOALKEEPER_POSITION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingTime {
    pub player_id: PlayerId,
    pub player_name: String,
    pub quarters_played: u8,
    pub goalkeeper_quarters: u8,
    pub quarters_sitting_out: u8,
    pub quarters_absent: u8,
    /// Quarters spent in a slot the player did not list as preferred.
    pub off_preference_quarters: u8,
}

/// One row per roster player, in roster order.
pub fn playing_time_summary(proposal: &LineupProposal, roster: &Roster) -> Vec<PlayingTime> {
    let format = proposal.format;
    let benches: Vec<_> = proposal.quarters.iter().map(|q| q.bench_or_derived(roster)).collect();

    roster
        .players()
        .iter()
        .map(|player| {
            let mut row = PlayingTime {
                player_id: player.id,
                player_name: player.name.clone(),
                quarters_played: 0,
                goalkeeper_quarters: 0,
                quarters_sitting_out: 0,
                quarters_absent: 0,
                off_preference_quarters: 0,
            };

            for (plan, bench) in proposal.quarters.iter().zip(&benches) {
                if let Some(slot) = plan.assignments.iter().find(|a| a.player_id == player.id) {
                    row.quarters_played = row.quarters_played.saturating_add(1);
                    if slot.position == GOALKEEPER_POSITION {
                        row.goalkeeper_quarters = row.goalkeeper_quarters.saturating_add(1);
                    }
                    let label = format.position_label(slot.position).unwrap_or("?");
                    if !player.prefers(label) {
                        row.off_preference_quarters = row.off_preference_quarters.saturating_add(1);
                    }
                } else if plan.absent.contains(&player.id) {
                    row.quarters_absent = row.quarters_absent.saturating_add(1);
                } else if bench.contains(&player.id) {
                    row.quarters_sitting_out = row.quarters_sitting_out.saturating_add(1);
                }
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameFormat, QuarterPlan, RosterPlayer};

    #[test]
    fn test_summary_counts_each_status() {
        let roster: Roster = vec![
            RosterPlayer::new(1, "Keeper").with_preferred(&["GK"]),
            RosterPlayer::new(2, "Striker").with_preferred(&["ST"]),
            RosterPlayer::new(3, "Sub"),
        ]
        .into_iter()
        .collect();

        let mut q3 = QuarterPlan::from_pairs([(1, 2), (7, 3)]);
        q3.absent.insert(1);
        let proposal = LineupProposal::new(
            GameFormat::SevenVSeven,
            vec![
                QuarterPlan::from_pairs([(1, 1), (7, 2)]),
                QuarterPlan::from_pairs([(1, 1), (7, 2)]),
                q3,
                QuarterPlan::from_pairs([(1, 1), (7, 3)]),
            ],
        );

        let rows = playing_time_summary(&proposal, &roster);
        assert_eq!(rows.len(), 3);

        let keeper = &rows[0];
        assert_eq!((keeper.quarters_played, keeper.goalkeeper_quarters), (3, 3));
        assert_eq!(keeper.quarters_absent, 1);
        assert_eq!(keeper.off_preference_quarters, 0);

        let striker = &rows[1];
        assert_eq!(striker.quarters_played, 3);
        assert_eq!(striker.goalkeeper_quarters, 1);
        assert_eq!(striker.off_preference_quarters, 1);
        assert_eq!(striker.quarters_sitting_out, 1);

        let sub = &rows[2];
        assert_eq!(sub.quarters_played, 2);
        assert_eq!(sub.quarters_sitting_out, 2);
        assert_eq!(sub.off_preference_quarters, 0);
    }

    #[test]
    fn test_summary_counts_saturate_on_oversized_proposal() {
        let roster: Roster = vec![RosterPlayer::new(1, "Keeper"), RosterPlayer::new(2, "Sub")]
            .into_iter()
            .collect();
        let proposal = LineupProposal::new(
            GameFormat::SevenVSeven,
            vec![QuarterPlan::from_pairs([(1, 1)]); 300],
        );

        let rows = playing_time_summary(&proposal, &roster);
        assert_eq!(rows[0].quarters_played, u8::MAX);
        assert_eq!(rows[0].goalkeeper_quarters, u8::MAX);
        assert_eq!(rows[1].quarters_sitting_out, u8::MAX);
    }
}
