//! Proposal acceptance gate.
//!
//! A proposal (coach edit or advice output) is accepted only when it is
//! well-formed, leaves every completed quarter of the stored lineup
//! untouched, and passes fair-play validation. A rejected proposal is
//! never partially applied: the caller keeps the stored lineup as is.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::compliance::{ComplianceReport, LineupValidator};
use crate::contracts::check_proposal;
use crate::error::Result;
use crate::models::{LineupProposal, QuarterNumber, Roster};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDecision {
    pub accepted: bool,
    pub report: ComplianceReport,
    /// Completed quarters the proposal tried to change.
    pub locked_conflicts: Vec<QuarterNumber>,
}

/// Quarters that are completed in `stored` but differ in `proposal`.
pub fn locked_quarter_conflicts(
    stored: &LineupProposal,
    proposal: &LineupProposal,
) -> Vec<QuarterNumber> {
    stored
        .locked_quarters()
        .filter(|&q| match (stored.quarter(q), proposal.quarter(q)) {
            (Some(kept), Some(proposed)) => !kept.same_lineup(proposed),
            _ => true,
        })
        .collect()
}

/// Contracts first (hard error), then lock check and fair-play rules.
pub fn review_proposal(
    validator: &LineupValidator,
    stored: Option<&LineupProposal>,
    proposal: &LineupProposal,
    roster: &Roster,
) -> Result<ProposalDecision> {
    check_proposal(proposal, roster, validator.rules())?;

    let locked_conflicts =
        stored.map(|s| locked_quarter_conflicts(s, proposal)).unwrap_or_default();
    if !locked_conflicts.is_empty() {
        warn!(quarters = ?locked_conflicts, "proposal alters completed quarters");
    }

    let report = validator.validate_with_availability(
        &proposal.assignments(),
        roster,
        proposal.format,
        &proposal.absences(),
    );

    let accepted = report.is_valid && locked_conflicts.is_empty();
    info!(accepted, violations = report.violations.len(), "proposal reviewed");

    Ok(ProposalDecision { accepted, report, locked_conflicts })
}
