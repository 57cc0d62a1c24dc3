//! Compliance Validator
//!
//! 4쿼터 라인업이 유소년 fair-play 규정을 지키는지 판정.
//! Pure: no I/O, no shared state, safe to call from any number of requests.

pub mod summary;
pub mod tally;
pub mod validator;
pub mod violation;

#[cfg(test)]
mod scenarios_test;

pub use summary::{playing_time_summary, PlayingTime};
pub use tally::{tally_participation, Participation, ParticipationTally};
pub use validator::{validate_lineup, LineupValidator};
pub use violation::{ComplianceReport, Violation, ViolationRule};
