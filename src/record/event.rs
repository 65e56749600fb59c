//! Match log events.

use serde::Deserialize;

use super::board::BoardSnapshot;

/// Final result recorded by an end event, from the first player's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum GameResult {
    #[serde(rename = "kResultWin")]
    Win,
    #[serde(rename = "kResultLoss")]
    Loss,
    #[serde(rename = "kResultDraw")]
    Draw,
    #[serde(rename = "kResultNotDetermined")]
    NotDetermined,
    #[serde(rename = "kResultInvalid")]
    Invalid,
    #[default]
    #[serde(other)]
    Unknown,
}

impl GameResult {
    /// Only an explicit win counts; draws and anything else do not.
    pub const fn first_player_won(self) -> bool {
        matches!(self, GameResult::Win)
    }
}

/// A single entry in a match log, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A mid-match board snapshot taken when a player was about to act.
    #[serde(rename = "kMainAction")]
    MainAction { board: BoardSnapshot },

    /// The end of the match.
    ///
    /// A `null` result is kept as `Unknown`; a missing one is an error.
    #[serde(rename = "kEnd")]
    End {
        #[serde(deserialize_with = "super::null_as_default")]
        result: GameResult,
    },

    /// Any other event type. Its payload is not inspected.
    #[serde(other)]
    Other,
}
