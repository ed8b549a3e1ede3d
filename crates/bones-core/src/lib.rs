//! Recursive dice-rolling and scoring engine for Bones.
//!
//! Models a die as a self-similar unit: a rolled face at or above the
//! explode threshold spawns one child die of the same configuration,
//! recursively. Scoring is per-kind — plain numeric sums, threshold
//! success counting, signed Fudge/Fate faces, and New World of Darkness
//! rote/botch handling. A [`Roller`] turns (count, type) token pairs plus
//! global overrides into [`DiceSet`]s and reports one combined result per
//! set, as a spread of faces or a single tally.

pub mod config;
pub mod dice;
pub mod error;
pub mod roller;

pub use config::RollConfig;
pub use dice::{DiceSet, Die, DieKind, ResultMode, SetResult};
pub use error::{DiceError, DiceResult};
pub use roller::Roller;
