//! Quarter-over-quarter change detection.

pub mod change;
pub mod game;
pub mod quarter_diff;

pub use change::{ChangeType, PositionChange, QuarterChanges, SwapPartner};
pub use game::{diff_game, sort_for_display};
pub use quarter_diff::diff_quarters;
