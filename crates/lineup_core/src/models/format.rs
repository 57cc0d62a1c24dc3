use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PositionNumber, GOALKEEPER_POSITION, QUARTERS};
use crate::error::LineupError;

/// League game format. Selects the number of field slots and the
/// goalkeeper-quarter ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GameFormat {
    #[serde(rename = "7v7", alias = "7-a-side")]
    SevenVSeven,
    #[serde(rename = "9v9", alias = "9-a-side")]
    NineVNine,
    #[serde(rename = "11v11", alias = "11-a-side")]
    ElevenVEleven,
}

// 2-3-1
const SEVEN_SLOTS: [&str; 7] = ["GK", "LB", "RB", "LM", "CM", "RM", "ST"];
// 3-3-2
const NINE_SLOTS: [&str; 9] = ["GK", "LB", "CB", "RB", "LM", "CM", "RM", "LF", "RF"];
// Traditional 1..11 shirt numbering
const ELEVEN_SLOTS: [&str; 11] =
    ["GK", "RB", "LB", "CB", "CB", "DM", "RW", "CM", "ST", "CAM", "LW"];

impl GameFormat {
    pub const ALL: [GameFormat; 3] =
        [GameFormat::SevenVSeven, GameFormat::NineVNine, GameFormat::ElevenVEleven];

    /// Number of players on the field, goalkeeper included.
    pub fn field_slots(&self) -> u8 {
        match self {
            GameFormat::SevenVSeven => 7,
            GameFormat::NineVNine => 9,
            GameFormat::ElevenVEleven => 11,
        }
    }

    /// Maximum quarters one player may spend in goal.
    pub fn goalkeeper_ceiling(&self) -> u8 {
        match self {
            GameFormat::SevenVSeven => 2,
            GameFormat::NineVNine => 3,
            GameFormat::ElevenVEleven => QUARTERS as u8,
        }
    }

    /// Short code ("7v7", "9v9", "11v11").
    pub fn code(&self) -> &'static str {
        match self {
            GameFormat::SevenVSeven => "7v7",
            GameFormat::NineVNine => "9v9",
            GameFormat::ElevenVEleven => "11v11",
        }
    }

    /// Slot label for a position number, `None` when outside the format.
    pub fn position_label(&self, position: PositionNumber) -> Option<&'static str> {
        let slots: &[&str] = match self {
            GameFormat::SevenVSeven => &SEVEN_SLOTS,
            GameFormat::NineVNine => &NINE_SLOTS,
            GameFormat::ElevenVEleven => &ELEVEN_SLOTS,
        };
        let index = usize::from(position).checked_sub(1)?;
        slots.get(index).copied()
    }

    pub fn contains_position(&self, position: PositionNumber) -> bool {
        (GOALKEEPER_POSITION..=self.field_slots()).contains(&position)
    }
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameFormat {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7v7" | "7" | "7-a-side" => Ok(GameFormat::SevenVSeven),
            "9v9" | "9" | "9-a-side" => Ok(GameFormat::NineVNine),
            "11v11" | "11" | "11-a-side" => Ok(GameFormat::ElevenVEleven),
            other => Err(LineupError::UnknownFormat(other.to_string())),
        }
    }
}
