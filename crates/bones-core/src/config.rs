//! Global roll configuration and overrides.

use crate::dice::ResultMode;

/// Global options applied to every die in a roll.
///
/// Thresholds override the per-kind defaults; `rote` and `botch` only take
/// effect on New World of Darkness dice. A seed makes the roll sequence
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct RollConfig {
    /// Explode threshold override (faces at or above spawn a child die).
    pub explode: Option<i32>,
    /// Forced result mode, overriding each die kind's default.
    pub mode: Option<ResultMode>,
    /// Success threshold override (tally counts dice at or above this).
    pub success: Option<i32>,
    /// NWoD rote: failed initial dice are re-rolled once.
    pub rote: bool,
    /// NWoD botch: dice rolling 1 penalize the tally.
    pub botch: bool,
    /// RNG seed for reproducible rolls.
    pub seed: Option<u64>,
}

impl RollConfig {
    /// Set the explode threshold override.
    pub fn with_explode(mut self, threshold: i32) -> Self {
        self.explode = Some(threshold);
        self
    }

    /// Force a result mode for every set.
    pub fn with_mode(mut self, mode: ResultMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the success threshold override.
    pub fn with_success(mut self, threshold: i32) -> Self {
        self.success = Some(threshold);
        self
    }

    /// Enable the NWoD rote re-roll.
    pub fn with_rote(mut self) -> Self {
        self.rote = true;
        self
    }

    /// Enable the NWoD botch penalty.
    pub fn with_botch(mut self) -> Self {
        self.botch = true;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
