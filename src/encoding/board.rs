//! Board snapshot -> feature vector encoding.
//!
//! Produces a flat [100] f32 vector. Layout:
//!   [0]      current player's hero: hp + armor
//!   [1]      opponent's hero: hp + armor
//!   [2:51]   current player's minions: 7 slots x 7 features
//!   [51:100] opponent's minions: 7 slots x 7 features
//!
//! Feature layout per minion slot (7 channels):
//!   [0] hp  [1] max_hp  [2] attack
//!   [3] attackable  [4] taunt  [5] shield  [6] stealth
//!
//! Trait channels are bipolar: 1.0 for true, -1.0 for false. Empty slots use
//! `MINION_PLACEHOLDER`. Minions past the seventh are dropped.

use crate::record::{BoardSnapshot, Hero, Minion};

/// Number of minion slots per side.
pub const NUM_SLOTS: usize = 7;

/// Number of features per minion slot.
pub const MINION_FEATURES: usize = 7;

/// Number of features per hero.
pub const HERO_FEATURES: usize = 1;

/// Width of one side's minion block.
pub const SIDE_MINION_LEN: usize = NUM_SLOTS * MINION_FEATURES;

/// Total length of an encoded board.
pub const FEATURE_LEN: usize = 2 * HERO_FEATURES + 2 * SIDE_MINION_LEN;

/// Feature offset constants.
pub const FEAT_CURRENT_HERO: usize = 0;
pub const FEAT_OPPONENT_HERO: usize = FEAT_CURRENT_HERO + HERO_FEATURES;
pub const FEAT_CURRENT_MINIONS: usize = FEAT_OPPONENT_HERO + HERO_FEATURES;
pub const FEAT_OPPONENT_MINIONS: usize = FEAT_CURRENT_MINIONS + SIDE_MINION_LEN;

/// Channel offsets within a minion slot.
pub const MINION_HP: usize = 0;
pub const MINION_MAX_HP: usize = 1;
pub const MINION_ATTACK: usize = 2;
pub const MINION_ATTACKABLE: usize = 3;
pub const MINION_TAUNT: usize = 4;
pub const MINION_SHIELD: usize = 5;
pub const MINION_STEALTH: usize = 6;

/// Bipolar values for boolean traits.
pub const TRAIT_TRUE: f32 = 1.0;
pub const TRAIT_FALSE: f32 = -1.0;

/// Encoding of an unoccupied minion slot.
pub const MINION_PLACEHOLDER: [f32; MINION_FEATURES] = [
    0.0,
    0.0,
    0.0,
    TRAIT_FALSE,
    TRAIT_FALSE,
    TRAIT_FALSE,
    TRAIT_FALSE,
];

/// A fully encoded board.
pub type FeatureVector = [f32; FEATURE_LEN];

/// Maps a boolean trait to its bipolar value.
#[inline]
pub const fn bipolar(flag: bool) -> f32 {
    if flag {
        TRAIT_TRUE
    } else {
        TRAIT_FALSE
    }
}

/// Collapses a hero into a single value. Armor and health are summed.
#[inline]
pub fn encode_hero(hero: &Hero) -> f32 {
    hero.hp + hero.armor
}

/// Encodes one minion into its slot channels.
pub fn encode_minion(minion: &Minion) -> [f32; MINION_FEATURES] {
    let mut slot = [0.0f32; MINION_FEATURES];
    slot[MINION_HP] = minion.hp;
    slot[MINION_MAX_HP] = minion.max_hp;
    slot[MINION_ATTACK] = minion.attack;
    slot[MINION_ATTACKABLE] = bipolar(minion.attackable);
    slot[MINION_TAUNT] = bipolar(minion.taunt);
    slot[MINION_SHIELD] = bipolar(minion.shield);
    slot[MINION_STEALTH] = bipolar(minion.stealth);
    slot
}

/// Writes `records` into `out` as fixed-width slots, truncating or padding
/// with `placeholder` so exactly `out.len() / W` slots are written.
///
/// `out.len()` must be a multiple of `W`.
pub fn pad_slots<I, const W: usize>(out: &mut [f32], records: I, placeholder: &[f32; W])
where
    I: IntoIterator<Item = [f32; W]>,
{
    debug_assert_eq!(out.len() % W, 0, "slot buffer is not a multiple of {}", W);
    let mut records = records.into_iter();
    for slot in out.chunks_exact_mut(W) {
        match records.next() {
            Some(record) => slot.copy_from_slice(&record),
            None => slot.copy_from_slice(placeholder),
        }
    }
}

/// Encodes one side's minions into a `SIDE_MINION_LEN` block.
pub fn encode_minions(out: &mut [f32], minions: &[Minion]) {
    pad_slots(out, minions.iter().map(encode_minion), &MINION_PLACEHOLDER);
}

/// Encodes a board snapshot into a flat [100] f32 array.
///
/// Always relative to the snapshot's current player: their hero and minions
/// come first regardless of which seat they hold.
pub fn encode_board(board: &BoardSnapshot) -> FeatureVector {
    let mut features = [0.0f32; FEATURE_LEN];

    features[FEAT_CURRENT_HERO] = encode_hero(&board.current_player.hero);
    features[FEAT_OPPONENT_HERO] = encode_hero(&board.opponent_player.hero);

    encode_minions(
        &mut features[FEAT_CURRENT_MINIONS..FEAT_CURRENT_MINIONS + SIDE_MINION_LEN],
        board.current_player.minions(),
    );
    encode_minions(
        &mut features[FEAT_OPPONENT_MINIONS..FEAT_OPPONENT_MINIONS + SIDE_MINION_LEN],
        board.opponent_player.minions(),
    );

    features
}
