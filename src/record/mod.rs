//! Match log data model.
//!
//! Typed views over one decoded match document: the events it contains and
//! the board snapshots carried by main-action events.

pub mod board;
pub mod event;

pub use board::{BoardSnapshot, Hero, Minion, PlayerSide, PlayerState, FIRST_PLAYER_ID};
pub use event::{Event, GameResult};

use serde::{Deserialize, Deserializer};

/// Reads a field that may be JSON `null`, substituting the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
