//! Match outcome resolution.

use crate::record::Event;

/// Scans a match for its end event and reports whether the first player won.
///
/// Returns `None` when the match has no end event. If several end events are
/// present, the last one decides.
pub fn resolve_outcome(events: &[Event]) -> Option<bool> {
    let mut first_player_won = None;
    for event in events {
        if let Event::End { result } = event {
            first_player_won = Some(result.first_player_won());
        }
    }
    first_player_won
}
