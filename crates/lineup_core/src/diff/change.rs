use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, PositionNumber, QuarterNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Came off the bench into a position
    NewIn,
    /// Left the field for the bench
    SittingOut,
    /// Moved from one position to another
    NewPosition,
    /// Exchanged positions with exactly one other player
    PositionSwap,
}

/// The other half of a [`ChangeType::PositionSwap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPartner {
    pub player_id: PlayerId,
    pub player_name: String,
    pub from_position: PositionNumber,
    pub to_position: PositionNumber,
}

/// One player's movement between two consecutive quarters.
/// Derived on every diff call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChange {
    pub player_id: PlayerId,
    pub player_name: String,
    pub change_type: ChangeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_position: Option<PositionNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_position: Option<PositionNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_partner: Option<SwapPartner>,
}

impl PositionChange {
    pub(crate) fn new_in(player_id: PlayerId, player_name: String, to: PositionNumber) -> Self {
        Self {
            player_id,
            player_name,
            change_type: ChangeType::NewIn,
            from_position: None,
            to_position: Some(to),
            swap_partner: None,
        }
    }

    pub(crate) fn sitting_out(
        player_id: PlayerId,
        player_name: String,
        from: PositionNumber,
    ) -> Self {
        Self {
            player_id,
            player_name,
            change_type: ChangeType::SittingOut,
            from_position: Some(from),
            to_position: None,
            swap_partner: None,
        }
    }

    pub(crate) fn new_position(
        player_id: PlayerId,
        player_name: String,
        from: PositionNumber,
        to: PositionNumber,
    ) -> Self {
        Self {
            player_id,
            player_name,
            change_type: ChangeType::NewPosition,
            from_position: Some(from),
            to_position: Some(to),
            swap_partner: None,
        }
    }

    /// (from, to) for records that carry both ends.
    pub fn movement(&self) -> Option<(PositionNumber, PositionNumber)> {
        Some((self.from_position?, self.to_position?))
    }

    fn as_partner(&self) -> Option<SwapPartner> {
        let (from_position, to_position) = self.movement()?;
        Some(SwapPartner {
            player_id: self.player_id,
            player_name: self.player_name.clone(),
            from_position,
            to_position,
        })
    }

    /// Turns two mirrored moves into a swap pair referencing each other.
    pub(crate) fn pair_as_swap(a: &mut PositionChange, b: &mut PositionChange) {
        let partner_of_a = b.as_partner();
        let partner_of_b = a.as_partner();
        a.change_type = ChangeType::PositionSwap;
        a.swap_partner = partner_of_a;
        b.change_type = ChangeType::PositionSwap;
        b.swap_partner = partner_of_b;
    }
}

/// Changes between quarter `quarter - 1` and `quarter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterChanges {
    pub quarter: QuarterNumber,
    pub changes: Vec<PositionChange>,
}
