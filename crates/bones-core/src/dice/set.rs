//! Groups of identically-configured dice rolled as one unit.
//!
//! A set rolls every die independently and reports a single combined
//! result: the flattened spread of all faces (exploded children included,
//! depth-first in set order) or one aggregated tally. Botch cancellation
//! is a set-level rule applied after rolling, before scoring.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::RollConfig;
use crate::error::{DiceError, DiceResult};

use super::{Die, DieKind, ResultMode};

/// The combined result of one set's roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetResult {
    /// One aggregated number (sum or success count).
    Tally(i32),
    /// Every face value, in roll order.
    Spread(Vec<i32>),
}

impl std::fmt::Display for SetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tally(total) => write!(f, "{total}"),
            Self::Spread(faces) => {
                let faces: Vec<String> = faces.iter().map(ToString::to_string).collect();
                write!(f, "{}", faces.join(" "))
            }
        }
    }
}

/// An ordered group of same-kind dice rolled together.
#[derive(Debug, Clone)]
pub struct DiceSet {
    kind: DieKind,
    dice: Vec<Die>,
    mode: ResultMode,
    success: Option<i32>,
    botch: bool,
}

impl DiceSet {
    /// Build a set of `count` dice from a die-type token.
    ///
    /// Fails on an unrecognized token or a zero count before any die
    /// exists, so a bad set never has partial state.
    pub fn new(count: u32, token: &str, config: &RollConfig) -> DiceResult<Self> {
        let kind = DieKind::from_token(token)?;
        Self::with_kind(count, kind, config)
    }

    /// Build a set of `count` dice of an already-parsed kind.
    pub fn with_kind(count: u32, kind: DieKind, config: &RollConfig) -> DiceResult<Self> {
        if count < 1 {
            return Err(DiceError::InvalidCount(count.to_string()));
        }

        let template = Die::new(kind, config)?;
        let success = template.success_threshold();

        // A forced mode always wins; a success threshold flips the default
        // to tally; otherwise the kind decides.
        let mode = match config.mode {
            Some(mode) => mode,
            None if success.is_some() => ResultMode::Tally,
            None => kind.default_mode(),
        };

        let dice = vec![template; count as usize];
        Ok(Self {
            kind,
            dice,
            mode,
            success,
            botch: config.botch && kind == DieKind::Nwod,
        })
    }

    /// The kind shared by every die in the set.
    pub fn kind(&self) -> DieKind {
        self.kind
    }

    /// The resolved result mode for this set.
    pub fn mode(&self) -> ResultMode {
        self.mode
    }

    /// How many dice the set started with (exploded children excluded).
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Roll every die in the set.
    pub fn roll(&mut self, rng: &mut StdRng) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// All faces rolled by the set, flattened in set order.
    pub fn spread(&self) -> Vec<i32> {
        self.dice.iter().flat_map(Die::spread).collect()
    }

    /// The set's aggregated tally, exploded children included.
    pub fn tally(&self) -> i32 {
        if self.botch
            && let Some(threshold) = self.success
        {
            return cancel_botches(&self.spread(), threshold);
        }
        self.dice.iter().map(Die::tally).sum()
    }

    /// The set's combined result in its resolved mode.
    pub fn result(&self) -> SetResult {
        match self.mode {
            ResultMode::Spread => SetResult::Spread(self.spread()),
            ResultMode::Tally => SetResult::Tally(self.tally()),
        }
    }
}

/// Score a botch-enabled set: each 1 cancels the single highest-valued
/// remaining success die (earliest-rolled among ties); a 1 with no success
/// left to cancel scores -1. Every success counts exactly 1, so removing
/// the highest is the same subtraction as removing any.
fn cancel_botches(faces: &[i32], threshold: i32) -> i32 {
    let successes = faces.iter().filter(|&&face| face >= threshold).count() as i32;
    let ones = faces.iter().filter(|&&face| face == 1).count() as i32;
    let canceled = successes.min(ones);
    (successes - canceled) - (ones - canceled)
}
