//! # lineup_core - Fair-Play Lineup Constraint Engine
//!
//! Youth-soccer lineup rules for a 4-quarter game.
//!
//! ## Components
//! - **Compliance Validator** ([`compliance`]): checks a 4-quarter proposal
//!   against the fair-play rules and lists every violation at once
//! - **Quarter Diff Engine** ([`diff`]): classifies player movements between
//!   two consecutive quarters (in, out, moved, swapped)
//!
//! Both are pure functions over immutable inputs. Shape checks live in
//! [`contracts`]; [`api`] wraps everything in a JSON request/response layer.
//!
//! ```rust
//! use lineup_core::{validate_lineup, GameFormat, QuarterAssignment, Roster, RosterPlayer};
//!
//! let roster: Roster = (1..=7).map(|id| RosterPlayer::new(id, format!("P{id}"))).collect();
//! let quarter = QuarterAssignment::from_pairs((1..=7u32).map(|id| (id as u8, id)));
//! let report = validate_lineup(&vec![quarter; 4], &roster, GameFormat::ElevenVEleven);
//! assert!(report.is_valid);
//! ```

pub mod acceptance;
pub mod api;
pub mod compliance;
pub mod config;
pub mod contracts;
pub mod diff;
pub mod error;
pub mod models;

pub use acceptance::{locked_quarter_conflicts, review_proposal, ProposalDecision};
pub use api::{accept_proposal_json, diff_quarters_json, validate_lineup_json};
pub use compliance::{
    playing_time_summary, validate_lineup, ComplianceReport, LineupValidator, PlayingTime,
    Violation, ViolationRule,
};
pub use config::FairPlayRules;
pub use diff::{
    diff_game, diff_quarters, sort_for_display, ChangeType, PositionChange, QuarterChanges,
    SwapPartner,
};
pub use error::{LineupError, Result};
pub use models::{
    Assignment, GameFormat, LineupProposal, PlayerId, PositionNumber, QuarterAssignment,
    QuarterNumber, QuarterPlan, Roster, RosterPlayer, GOALKEEPER_POSITION, QUARTERS,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
