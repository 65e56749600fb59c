//! Training labels.
//!
//! Labels are relative to the snapshot's current player: `FirstPlayerWin`
//! (0) when the current player ends up on the winning side, otherwise
//! `FirstPlayerLoss` (1). Training code depends on these exact values.

use crate::record::BoardSnapshot;

/// Raw value of `Label::FirstPlayerWin`.
pub const LABEL_FIRST_PLAYER_WIN: u8 = 0;

/// Raw value of `Label::FirstPlayerLoss`.
pub const LABEL_FIRST_PLAYER_LOSS: u8 = 1;

/// Binary outcome label for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    FirstPlayerWin,
    FirstPlayerLoss,
}

impl Label {
    /// Returns the integer written to training data.
    pub const fn value(self) -> u8 {
        match self {
            Label::FirstPlayerWin => LABEL_FIRST_PLAYER_WIN,
            Label::FirstPlayerLoss => LABEL_FIRST_PLAYER_LOSS,
        }
    }

    /// Returns the opposite label.
    #[cfg(test)]
    pub const fn flipped(self) -> Label {
        match self {
            Label::FirstPlayerWin => Label::FirstPlayerLoss,
            Label::FirstPlayerLoss => Label::FirstPlayerWin,
        }
    }
}

/// Labels a snapshot given whether the absolute first player won the match.
pub fn assign_label(board: &BoardSnapshot, first_player_won: bool) -> Label {
    if board.current_player_id.is_first() == first_player_won {
        Label::FirstPlayerWin
    } else {
        Label::FirstPlayerLoss
    }
}
