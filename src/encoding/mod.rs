//! Match -> training sample encoding.
//!
//! Each main-action event in a match becomes one `Sample`: the board encoded
//! as a fixed-width feature vector, paired with a label saying whether the
//! snapshot's current player went on to win. The match outcome is resolved
//! from the whole log before any snapshot is labeled.

pub mod board;
pub mod label;
pub mod outcome;

pub use board::{encode_board, pad_slots, FeatureVector, FEATURE_LEN, MINION_PLACEHOLDER};
pub use label::{assign_label, Label, LABEL_FIRST_PLAYER_LOSS, LABEL_FIRST_PLAYER_WIN};
pub use outcome::resolve_outcome;

use crate::document::{parse_document, DocumentError, MatchDocument};
use crate::record::Event;

/// Errors that can occur while turning a match into samples.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("main action at event {index} cannot be labeled: match has no end event")]
    UndefinedOutcome { index: usize },
}

/// One training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: FeatureVector,
    pub label: Label,
}

/// Encodes every main-action snapshot in a match, in log order.
///
/// A match without main actions yields no samples, even if it has no end
/// event.
pub fn encode_match(doc: &MatchDocument) -> Result<Vec<Sample>, EncodeError> {
    let events = doc.events();
    let first_player_won = resolve_outcome(events);

    let mut samples = Vec::new();
    for (index, event) in events.iter().enumerate() {
        let Event::MainAction { board } = event else {
            continue;
        };
        let first_player_won = first_player_won.ok_or(EncodeError::UndefinedOutcome { index })?;
        samples.push(Sample {
            features: encode_board(board),
            label: assign_label(board, first_player_won),
        });
    }
    Ok(samples)
}

/// Parses a match from JSON text and encodes it.
pub fn encode_match_str(s: &str) -> Result<Vec<Sample>, EncodeError> {
    let doc = parse_document(s)?;
    encode_match(&doc)
}
