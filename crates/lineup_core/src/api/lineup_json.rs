//! JSON API for the surrounding web application.
//!
//! Every entry point takes a JSON string and returns either the response
//! JSON or an error string of the form `"<CODE>: message"`. Input shape is
//! checked by [`crate::contracts`] before either component runs.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::acceptance::{review_proposal, ProposalDecision};
use crate::compliance::{playing_time_summary, ComplianceReport, LineupValidator, PlayingTime};
use crate::config::FairPlayRules;
use crate::contracts::{check_proposal, check_quarter, check_roster};
use crate::diff::{diff_quarters, sort_for_display, PositionChange};
use crate::error::LineupError;
use crate::models::{GameFormat, LineupProposal, QuarterPlan, Roster};

pub const SCHEMA_VERSION: u8 = 1;

fn err_code(err: LineupError) -> String {
    format!("{}: {}", err.code(), err)
}

fn parse<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| err_code(LineupError::Json(e)))
}

fn check_schema(version: u8) -> Result<(), String> {
    if version == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(err_code(LineupError::UnsupportedSchema(version)))
    }
}

/// Request rules when given, otherwise `LINEUP_RULES_PATH` / league defaults.
fn resolve_rules(rules: Option<FairPlayRules>) -> Result<FairPlayRules, LineupError> {
    match rules {
        Some(rules) => {
            rules.validate()?;
            Ok(rules)
        }
        None => FairPlayRules::from_env(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| err_code(LineupError::Json(e)))
}

// ============================================================================
// validate
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub schema_version: u8,
    pub format: GameFormat,
    pub roster: Roster,
    pub quarters: Vec<QuarterPlan>,
    #[serde(default)]
    pub rules: Option<FairPlayRules>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(flatten)]
    pub report: ComplianceReport,
    pub playing_time: Vec<PlayingTime>,
}

pub fn validate_lineup_json(request_json: &str) -> Result<String, String> {
    let request: ValidateRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let rules = resolve_rules(request.rules).map_err(err_code)?;
    let proposal = LineupProposal::new(request.format, request.quarters);
    check_proposal(&proposal, &request.roster, &rules).map_err(err_code)?;

    let validator = LineupValidator::new(rules);
    let report = validator.validate_with_availability(
        &proposal.assignments(),
        &request.roster,
        proposal.format,
        &proposal.absences(),
    );
    let playing_time = playing_time_summary(&proposal, &request.roster);

    debug!(is_valid = report.is_valid, "validate_lineup_json");
    to_json(&ValidateResponse { report, playing_time })
}

// ============================================================================
// diff
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DiffRequest {
    pub schema_version: u8,
    pub format: GameFormat,
    pub roster: Roster,
    pub previous: QuarterPlan,
    pub current: QuarterPlan,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiffResponse {
    pub changes: Vec<PositionChange>,
}

pub fn diff_quarters_json(request_json: &str) -> Result<String, String> {
    let request: DiffRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let rules = FairPlayRules::from_env().map_err(err_code)?;
    check_roster(&request.roster, &rules).map_err(err_code)?;
    check_quarter(1, &request.previous, &request.roster, request.format).map_err(err_code)?;
    check_quarter(2, &request.current, &request.roster, request.format).map_err(err_code)?;

    let mut changes = diff_quarters(
        &request.previous.assignment(),
        &request.current.assignment(),
        &request.previous.bench_or_derived(&request.roster),
        &request.current.bench_or_derived(&request.roster),
        &request.roster,
    );
    sort_for_display(&mut changes);

    to_json(&DiffResponse { changes })
}

// ============================================================================
// accept
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AcceptRequest {
    pub schema_version: u8,
    pub roster: Roster,
    #[serde(default)]
    pub stored: Option<LineupProposal>,
    pub proposal: LineupProposal,
    #[serde(default)]
    pub rules: Option<FairPlayRules>,
}

pub fn accept_proposal_json(request_json: &str) -> Result<String, String> {
    let request: AcceptRequest = parse(request_json)?;
    check_schema(request.schema_version)?;

    let rules = resolve_rules(request.rules).map_err(err_code)?;
    let validator = LineupValidator::new(rules);
    let decision: ProposalDecision =
        review_proposal(&validator, request.stored.as_ref(), &request.proposal, &request.roster)
            .map_err(err_code)?;

    if !decision.accepted {
        warn!(
            violations = decision.report.violations.len(),
            locked = decision.locked_conflicts.len(),
            "proposal rejected"
        );
    }
    to_json(&decision)
}
