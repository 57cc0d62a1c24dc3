use super::change::{ChangeType, PositionChange, QuarterChanges};
use super::quarter_diff::diff_quarters;
use crate::models::{LineupProposal, QuarterNumber, Roster};

/// Changes for every quarter that has a predecessor (2, 3, 4).
pub fn diff_game(proposal: &LineupProposal, roster: &Roster) -> Vec<QuarterChanges> {
    proposal
        .quarters
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (previous, current) = (&pair[0], &pair[1]);
            let mut changes = diff_quarters(
                &previous.assignment(),
                &current.assignment(),
                &previous.bench_or_derived(roster),
                &current.bench_or_derived(roster),
                roster,
            );
            sort_for_display(&mut changes);
            QuarterChanges { quarter: (i + 2) as QuarterNumber, changes }
        })
        .collect()
}

fn display_rank(change: ChangeType) -> u8 {
    match change {
        ChangeType::PositionSwap => 0,
        ChangeType::NewPosition => 1,
        ChangeType::NewIn => 2,
        ChangeType::SittingOut => 3,
    }
}

/// Coach-facing order: swaps, moves, entries, exits; then by slot.
pub fn sort_for_display(changes: &mut [PositionChange]) {
    changes.sort_by(|a, b| {
        display_rank(a.change_type)
            .cmp(&display_rank(b.change_type))
            .then_with(|| slot_of(a).cmp(&slot_of(b)))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
}

fn slot_of(change: &PositionChange) -> (u8, u8) {
    (
        change.to_position.or(change.from_position).unwrap_or(u8::MAX),
        change.from_position.unwrap_or(u8::MAX),
    )
}
