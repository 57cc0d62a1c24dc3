// crates/lineup_core/src/compliance/scenarios_test.rs

use super::*;
use crate::models::{GameFormat, QuarterAssignment, Roster, RosterPlayer};

fn roster(n: u32) -> Roster {
    (1..=n).map(|id| RosterPlayer::new(id, format!("Player {id}"))).collect()
}

// ============================================
// Full-squad 11v11 with one unused player
// ============================================

#[test]
fn eleven_full_games_and_one_unused_player() {
    let roster = roster(12);
    let quarter = QuarterAssignment::from_pairs((1..=11u32).map(|id| (id as u8, id)));
    let quarters = vec![quarter; 4];

    let report = validate_lineup(&quarters, &roster, GameFormat::ElevenVEleven);

    assert!(!report.is_valid);
    let short: Vec<_> = report.by_rule(ViolationRule::MinimumQuarters).collect();
    assert_eq!(short.len(), 1);
    assert_eq!(short[0].player_id, 12);
    assert_eq!(short[0].quarters_played, 0);
    assert_eq!(short[0].issue, "plays 0 quarters, minimum 3 required");

    let full: Vec<_> = report.by_rule(ViolationRule::FullGameBeforeMinimum).collect();
    assert_eq!(full.len(), 11);
    assert_eq!(report.by_rule(ViolationRule::GoalkeeperCeiling).count(), 0);
    assert_eq!(report.violations.len(), 12);
}

// ============================================
// 9v9 goalkeeper ceiling boundary
// ============================================

/// 12 players, 9 slots. Keeper is player 1 in the first `gk_quarters`
/// quarters and player 4 otherwise; everyone ends up with exactly 3 quarters.
fn nine_a_side(gk_quarters: usize) -> Vec<QuarterAssignment> {
    // Each quarter rests three players so all 12 play 3 of 4 quarters.
    let resting: [[u32; 3]; 4] = [[10, 11, 12], [7, 8, 9], [4, 5, 6], [1, 2, 3]];
    (0..4)
        .map(|q| {
            let keeper = if q < gk_quarters { 1 } else { 4 };
            let mut field: Vec<u32> =
                (1..=12).filter(|id| !resting[q].contains(id) && *id != keeper).collect();
            field.truncate(8);
            let mut slots = vec![(1u8, keeper)];
            slots.extend(field.into_iter().enumerate().map(|(i, id)| (i as u8 + 2, id)));
            QuarterAssignment::from_pairs(slots)
        })
        .collect()
}

#[test]
fn nine_a_side_three_goalkeeper_quarters_is_within_ceiling() {
    let report = validate_lineup(&nine_a_side(3), &roster(12), GameFormat::NineVNine);
    assert_eq!(report.by_rule(ViolationRule::GoalkeeperCeiling).count(), 0);
}

#[test]
fn nine_a_side_fourth_goalkeeper_quarter_is_flagged() {
    let mut quarters = nine_a_side(3);
    // Put player 1 back in goal for quarter 4 (replacing player 4).
    quarters[3].insert(1, 1);

    let report = validate_lineup(&quarters, &roster(12), GameFormat::NineVNine);
    let gk: Vec<_> = report.by_rule(ViolationRule::GoalkeeperCeiling).collect();
    assert_eq!(gk.len(), 1);
    assert_eq!(gk[0].player_id, 1);
    assert_eq!(gk[0].issue, "plays goalkeeper 4 quarters (maximum 3 for 9v9)");
}

// ============================================
// Mixed full games and three-quarter games
// ============================================

/// 10 players in 9v9: players 1..=6 play every quarter, players 7..=10
/// each rest once. The keeper rotates through players 1..=4.
fn nine_a_side_mixed() -> Vec<QuarterAssignment> {
    (0..4u32)
        .map(|q| {
            let mut field: Vec<u32> = (1..=10).filter(|id| *id != 7 + q).collect();
            field.rotate_left(q as usize);
            QuarterAssignment::from_pairs(
                field.into_iter().enumerate().map(|(i, id)| (i as u8 + 1, id)),
            )
        })
        .collect()
}

#[test]
fn full_games_are_fine_once_everyone_reaches_three() {
    let quarters = nine_a_side_mixed();
    let report = validate_lineup(&quarters, &roster(10), GameFormat::NineVNine);
    assert!(report.is_valid, "{:?}", report.messages());
}

#[test]
fn one_short_player_flags_every_full_game() {
    let mut quarters = nine_a_side_mixed();
    // Player 7 takes player 10's slot in quarter 1: 7 now plays 4, 10 only 2
    let slot = quarters[0].position_of(10).unwrap();
    quarters[0].insert(slot, 7);

    let report = validate_lineup(&quarters, &roster(10), GameFormat::NineVNine);
    let short: Vec<_> = report.by_rule(ViolationRule::MinimumQuarters).collect();
    assert_eq!(short.len(), 1);
    assert_eq!(short[0].player_id, 10);

    let full: Vec<u32> =
        report.by_rule(ViolationRule::FullGameBeforeMinimum).map(|v| v.player_id).collect();
    assert_eq!(full, vec![1, 2, 3, 4, 5, 6, 7]);
}

// ============================================
// Property tests
// ============================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// (format, roster size, 4 quarters of shuffled ids with a fielded count)
    fn lineup_strategy() -> impl Strategy<Value = (GameFormat, u32, Vec<QuarterAssignment>)> {
        (0usize..3, 4u32..=14)
            .prop_flat_map(|(f, n)| {
                let ids: Vec<u32> = (1..=n).collect();
                (
                    Just(GameFormat::ALL[f]),
                    Just(n),
                    proptest::collection::vec(Just(ids).prop_shuffle(), 4),
                    proptest::collection::vec(0usize..=11, 4),
                )
            })
            .prop_map(|(format, n, orders, counts)| {
                let slots = usize::from(format.field_slots());
                let quarters = orders
                    .into_iter()
                    .zip(counts)
                    .map(|(order, count)| {
                        QuarterAssignment::from_pairs(
                            order
                                .into_iter()
                                .take(count.min(slots))
                                .enumerate()
                                .map(|(i, id)| (i as u8 + 1, id)),
                        )
                    })
                    .collect();
                (format, n, quarters)
            })
    }

    fn played(quarters: &[QuarterAssignment], id: u32) -> usize {
        quarters.iter().filter(|q| q.contains_player(id)).count()
    }

    fn kept_goal(quarters: &[QuarterAssignment], id: u32) -> usize {
        quarters.iter().filter(|q| q.player_at(1) == Some(id)).count()
    }

    proptest! {
        /// Property: minimum-quarters violation iff fewer than 3 quarters
        #[test]
        fn prop_minimum_rule_matches_count((format, n, quarters) in lineup_strategy()) {
            let report = validate_lineup(&quarters, &roster(n), format);
            for id in 1..=n {
                let flagged = report
                    .by_rule(ViolationRule::MinimumQuarters)
                    .any(|v| v.player_id == id);
                prop_assert_eq!(flagged, played(&quarters, id) < 3);
            }
        }

        /// Property: without a 4-quarter player the 3/4 rule stays silent
        #[test]
        fn prop_no_full_game_no_fairness_violation((format, n, quarters) in lineup_strategy()) {
            let report = validate_lineup(&quarters, &roster(n), format);
            let anyone_full = (1..=n).any(|id| played(&quarters, id) == 4);
            if !anyone_full {
                prop_assert_eq!(report.by_rule(ViolationRule::FullGameBeforeMinimum).count(), 0);
            }
        }

        /// Property: 3/4 rule flags a player iff they played 4 and someone is short
        #[test]
        fn prop_full_game_rule_matches_counts((format, n, quarters) in lineup_strategy()) {
            let report = validate_lineup(&quarters, &roster(n), format);
            let anyone_short = (1..=n).any(|id| played(&quarters, id) < 3);
            for id in 1..=n {
                let flagged = report
                    .by_rule(ViolationRule::FullGameBeforeMinimum)
                    .any(|v| v.player_id == id);
                prop_assert_eq!(flagged, anyone_short && played(&quarters, id) == 4);
            }
        }

        /// Property: goalkeeper ceiling per format
        #[test]
        fn prop_goalkeeper_ceiling((format, n, quarters) in lineup_strategy()) {
            let report = validate_lineup(&quarters, &roster(n), format);
            for id in 1..=n {
                let flagged = report
                    .by_rule(ViolationRule::GoalkeeperCeiling)
                    .any(|v| v.player_id == id);
                let expected = match format {
                    GameFormat::SevenVSeven => kept_goal(&quarters, id) >= 3,
                    GameFormat::NineVNine => kept_goal(&quarters, id) >= 4,
                    GameFormat::ElevenVEleven => false,
                };
                prop_assert_eq!(flagged, expected);
            }
        }

        /// Property: is_valid is exactly "no violations"
        #[test]
        fn prop_validity_matches_violations((format, n, quarters) in lineup_strategy()) {
            let report = validate_lineup(&quarters, &roster(n), format);
            prop_assert_eq!(report.is_valid, report.violations.is_empty());
        }
    }
}
