use thiserror::Error;

use crate::models::{PlayerId, PositionNumber, QuarterNumber};

/// Contract and infrastructure failures.
///
/// Fair-play rule violations are NOT errors: they are reported as data in
/// [`crate::compliance::ComplianceReport`]. Everything here means the input
/// shape itself was wrong and nothing should be computed from it.
#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Lineup must have exactly {expected} quarters, found {found}")]
    WrongQuarterCount { expected: usize, found: usize },

    #[error("Quarter {quarter}: position {position} is assigned more than once")]
    DuplicatePosition { quarter: QuarterNumber, position: PositionNumber },

    #[error("Quarter {quarter}: player {player_id} is assigned to more than one position")]
    DuplicatePlayer { quarter: QuarterNumber, player_id: PlayerId },

    #[error("Quarter {quarter}: position {position} is outside 1..={max} for {format}")]
    PositionOutOfRange {
        quarter: QuarterNumber,
        position: PositionNumber,
        max: u8,
        format: String,
    },

    #[error("Quarter {quarter}: player {player_id} is not on the roster")]
    UnknownPlayer { quarter: QuarterNumber, player_id: PlayerId },

    #[error("Quarter {quarter}: player {player_id} is both on the field and {status}")]
    ConflictingStatus { quarter: QuarterNumber, player_id: PlayerId, status: &'static str },

    #[error("Roster lists player {player_id} more than once")]
    DuplicateRosterId { player_id: PlayerId },

    #[error("Roster too small: found {found} players, at least {min} required")]
    RosterTooSmall { found: usize, min: usize },

    #[error("Unknown game format: {0}")]
    UnknownFormat(String),

    #[error("Invalid fair-play rules: {0}")]
    InvalidRules(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineupError {
    /// Stable code used in the `"<CODE>: message"` strings of the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            LineupError::WrongQuarterCount { .. } => "E_QUARTER_COUNT",
            LineupError::DuplicatePosition { .. } => "E_DUPLICATE_POSITION",
            LineupError::DuplicatePlayer { .. } => "E_DUPLICATE_PLAYER",
            LineupError::PositionOutOfRange { .. } => "E_POSITION_RANGE",
            LineupError::UnknownPlayer { .. } => "E_UNKNOWN_PLAYER",
            LineupError::ConflictingStatus { .. } => "E_CONFLICTING_STATUS",
            LineupError::DuplicateRosterId { .. } => "E_DUPLICATE_ROSTER_ID",
            LineupError::RosterTooSmall { .. } => "E_ROSTER_SIZE",
            LineupError::UnknownFormat(_) => "E_FORMAT",
            LineupError::InvalidRules(_) => "E_RULES",
            LineupError::UnsupportedSchema(_) => "E_SCHEMA",
            LineupError::Json(_) => "E_JSON",
            LineupError::Io(_) => "E_IO",
        }
    }

    /// Contract failures are caller bugs; JSON/IO failures may be retried.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(
            self,
            LineupError::Json(_) | LineupError::Io(_) | LineupError::InvalidRules(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
