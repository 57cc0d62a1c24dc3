pub mod format;
pub mod lineup;
pub mod player;

pub use format::GameFormat;
pub use lineup::{Assignment, LineupProposal, QuarterAssignment, QuarterPlan};
pub use player::{fallback_name, Roster, RosterPlayer};

/// Caller-supplied player identity.
pub type PlayerId = u32;
/// Field slot number; 1 is always the goalkeeper.
pub type PositionNumber = u8;
/// 1-based quarter number.
pub type QuarterNumber = u8;

/// Quarters in a game.
pub const QUARTERS: usize = 4;
/// Position number reserved for the goalkeeper in every format.
pub const GOALKEEPER_POSITION: PositionNumber = 1;
