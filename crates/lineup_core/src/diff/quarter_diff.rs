//! Quarter Diff Engine
//!
//! 이전 쿼터 → 현재 쿼터 사이의 선수 이동을 계산.
//!
//! ## 분류
//! - `new_in`: bench → field
//! - `sitting_out`: field → bench
//! - `new_position`: field → other field position
//! - `position_swap`: two players exchanged positions (strictly pairwise;
//!   a 3-player rotation stays three `new_position` records)
//!
//! Both mappings must be injective (one position per player); that is
//! checked by [`crate::contracts`], not here.

use std::collections::{BTreeSet, HashSet};

use tracing::trace;

use super::change::{ChangeType, PositionChange};
use crate::models::{PlayerId, QuarterAssignment, Roster};

/// Player-centric changes from `previous` to `current`.
///
/// Every player appears in at most one record. Players whose position did
/// not change, or who stayed on the bench, never appear. Order carries no
/// meaning; see [`super::sort_for_display`].
pub fn diff_quarters(
    previous: &QuarterAssignment,
    current: &QuarterAssignment,
    previous_bench: &BTreeSet<PlayerId>,
    current_bench: &BTreeSet<PlayerId>,
    roster: &Roster,
) -> Vec<PositionChange> {
    let all_positions: BTreeSet<_> = previous.positions().chain(current.positions()).collect();

    let mut changes = Vec::new();
    // Only players that produced a record; a player visited at their old
    // slot first must still be reported at their new one.
    let mut processed: HashSet<PlayerId> = HashSet::new();

    for position in all_positions {
        let now = current.player_at(position);
        let before = previous.player_at(position);
        if now == before {
            continue;
        }

        if let Some(incoming) = now.filter(|id| !processed.contains(id)) {
            let record = match previous.position_of(incoming) {
                Some(from) => Some(PositionChange::new_position(
                    incoming,
                    roster.name_of(incoming),
                    from,
                    position,
                )),
                None if previous_bench.contains(&incoming) => {
                    Some(PositionChange::new_in(incoming, roster.name_of(incoming), position))
                }
                // First appearance in the game data: nothing to compare against
                None => None,
            };
            if let Some(record) = record {
                processed.insert(incoming);
                changes.push(record);
            }
        }

        if let Some(outgoing) = before.filter(|id| !processed.contains(id)) {
            if !current.contains_player(outgoing) && current_bench.contains(&outgoing) {
                processed.insert(outgoing);
                changes.push(PositionChange::sitting_out(
                    outgoing,
                    roster.name_of(outgoing),
                    position,
                ));
            }
        }
    }

    merge_swaps(&mut changes);
    trace!(changes = changes.len(), "quarter diff computed");
    changes
}

/// Pairwise pass over `new_position` records: A(from→to) mirrored by
/// B(to→from) becomes a swap pair. n ≤ 11, so O(n²) is fine.
fn merge_swaps(changes: &mut [PositionChange]) {
    let moved: Vec<usize> = changes
        .iter()
        .enumerate()
        .filter(|(_, c)| c.change_type == ChangeType::NewPosition)
        .map(|(i, _)| i)
        .collect();

    for (k, &i) in moved.iter().enumerate() {
        for &j in &moved[k + 1..] {
            if changes[i].change_type != ChangeType::NewPosition
                || changes[j].change_type != ChangeType::NewPosition
            {
                continue;
            }
            let (Some((a_from, a_to)), Some((b_from, b_to))) =
                (changes[i].movement(), changes[j].movement())
            else {
                continue;
            };
            if a_from == b_to && a_to == b_from {
                let (head, tail) = changes.split_at_mut(j);
                PositionChange::pair_as_swap(&mut head[i], &mut tail[0]);
            }
        }
    }
}
