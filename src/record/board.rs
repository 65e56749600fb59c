//! Board snapshot types.
//!
//! A snapshot is recorded from one player's point of view: `current_player`
//! is whoever was acting, `opponent_player` the other side, and
//! `current_player_id` says which absolute seat the acting player holds.

use serde::Deserialize;

/// Seat identifier used by the game engine for the player who went first.
pub const FIRST_PLAYER_ID: &str = "kFirstPlayer";

/// Absolute seat of a player, independent of snapshot perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum PlayerSide {
    First,
    Second,
}

impl PlayerSide {
    /// Returns true for the absolute first player.
    pub const fn is_first(self) -> bool {
        matches!(self, PlayerSide::First)
    }

    /// Returns the other seat.
    #[cfg(test)]
    pub const fn opposite(self) -> PlayerSide {
        match self {
            PlayerSide::First => PlayerSide::Second,
            PlayerSide::Second => PlayerSide::First,
        }
    }
}

/// Any id other than `kFirstPlayer` counts as the second seat.
impl From<String> for PlayerSide {
    fn from(id: String) -> Self {
        if id == FIRST_PLAYER_ID {
            PlayerSide::First
        } else {
            PlayerSide::Second
        }
    }
}

/// A hero's survivability stats.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Hero {
    pub hp: f32,
    pub armor: f32,
}

/// A minion on the board.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Minion {
    pub hp: f32,
    pub max_hp: f32,
    pub attack: f32,
    /// Older logs omit this field or write `null`; either means the minion
    /// cannot attack.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub attackable: bool,
    pub taunt: bool,
    pub shield: bool,
    pub stealth: bool,
}

/// One player's half of the board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerState {
    pub hero: Hero,
    #[serde(default)]
    pub minions: Option<Vec<Minion>>,
}

impl PlayerState {
    /// Minions in board order. A missing or null list is empty.
    pub fn minions(&self) -> &[Minion] {
        self.minions.as_deref().unwrap_or(&[])
    }
}

/// Payload of a main-action event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardSnapshot {
    pub current_player_id: PlayerSide,
    pub current_player: PlayerState,
    pub opponent_player: PlayerState,
}

impl BoardSnapshot {
    /// Returns the same board as seen from the opponent's seat.
    #[cfg(test)]
    pub fn swapped(&self) -> BoardSnapshot {
        BoardSnapshot {
            current_player_id: self.current_player_id.opposite(),
            current_player: self.opponent_player.clone(),
            opponent_player: self.current_player.clone(),
        }
    }
}
