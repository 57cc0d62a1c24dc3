use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::PlayerId;

/// Which fair-play rule a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    /// The lineup does not have exactly 4 quarters; no per-player rule is run
    QuarterCount,
    /// Assignment references an id that is not on the roster (fail-closed)
    UnknownPlayer,
    /// Played fewer than the minimum quarters
    MinimumQuarters,
    /// Played all 4 quarters while someone else is still under the minimum
    FullGameBeforeMinimum,
    /// Kept goal more quarters than the format allows
    GoalkeeperCeiling,
}

/// One fair-play problem, phrased for the coach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub player_id: PlayerId,
    pub player_name: String,
    pub quarters_played: u8,
    pub rule: ViolationRule,
    /// Verbatim human-readable message.
    pub issue: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player_name, self.issue)
    }
}

/// Validation outcome. `is_valid` is always `violations.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl ComplianceReport {
    pub fn from_violations(mut violations: Vec<Violation>) -> Self {
        violations.sort_by_key(|v| (v.rule, v.player_id));
        Self { is_valid: violations.is_empty(), violations }
    }

    pub fn by_rule(&self, rule: ViolationRule) -> impl Iterator<Item = &Violation> + '_ {
        self.violations.iter().filter(move |v| v.rule == rule)
    }

    /// Messages ready to show verbatim ("Ava plays 2 quarters, minimum 3 required").
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
