//! Boundary Contracts (HARD gates)
//!
//! 검증기/디프 엔진 호출 전에 입력 형태를 확인.
//! **위반 시**: `Err(LineupError)` 반환, 부분 결과 없음.
//!
//! Both components assume well-formed input (injective quarters, known
//! ids, 4 quarters). Anything arriving from outside the process goes
//! through here first.

use std::collections::BTreeSet;

use crate::config::FairPlayRules;
use crate::error::{LineupError, Result};
use crate::models::{GameFormat, LineupProposal, QuarterNumber, QuarterPlan, Roster, QUARTERS};

/// Unique ids and minimum size.
pub fn check_roster(roster: &Roster, rules: &FairPlayRules) -> Result<()> {
    let mut seen = BTreeSet::new();
    for id in roster.ids() {
        if !seen.insert(id) {
            return Err(LineupError::DuplicateRosterId { player_id: id });
        }
    }

    if roster.len() < rules.min_roster_size {
        return Err(LineupError::RosterTooSmall {
            found: roster.len(),
            min: rules.min_roster_size,
        });
    }

    Ok(())
}

/// One quarter: injective, in range, known ids, no player in two states.
pub fn check_quarter(
    quarter: QuarterNumber,
    plan: &QuarterPlan,
    roster: &Roster,
    format: GameFormat,
) -> Result<()> {
    let mut positions = BTreeSet::new();
    let mut players = BTreeSet::new();

    for a in &plan.assignments {
        if !format.contains_position(a.position) {
            return Err(LineupError::PositionOutOfRange {
                quarter,
                position: a.position,
                max: format.field_slots(),
                format: format.to_string(),
            });
        }
        if !positions.insert(a.position) {
            return Err(LineupError::DuplicatePosition { quarter, position: a.position });
        }
        if !players.insert(a.player_id) {
            return Err(LineupError::DuplicatePlayer { quarter, player_id: a.player_id });
        }
    }

    let bench = plan.bench.iter().flatten();
    for &id in players.iter().chain(bench.clone()).chain(&plan.absent) {
        if !roster.contains(id) {
            return Err(LineupError::UnknownPlayer { quarter, player_id: id });
        }
    }

    if let Some(&id) = bench.clone().find(|id| players.contains(*id)) {
        return Err(LineupError::ConflictingStatus { quarter, player_id: id, status: "benched" });
    }
    if let Some(&id) = plan.absent.iter().find(|id| players.contains(*id)) {
        return Err(LineupError::ConflictingStatus { quarter, player_id: id, status: "absent" });
    }

    Ok(())
}

/// Full proposal: roster, exactly 4 quarters, each quarter well-formed.
pub fn check_proposal(
    proposal: &LineupProposal,
    roster: &Roster,
    rules: &FairPlayRules,
) -> Result<()> {
    check_roster(roster, rules)?;

    if proposal.quarters.len() != QUARTERS {
        return Err(LineupError::WrongQuarterCount {
            expected: QUARTERS,
            found: proposal.quarters.len(),
        });
    }

    for (i, plan) in proposal.quarters.iter().enumerate() {
        check_quarter((i + 1) as QuarterNumber, plan, roster, proposal.format)?;
    }

    Ok(())
}
