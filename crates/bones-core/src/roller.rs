//! The roller: builds dice sets from a specification and executes rolls.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RollConfig;
use crate::dice::{DiceSet, SetResult};
use crate::error::{DiceError, DiceResult};

/// Rolls one or more dice sets built from (count, type) token pairs.
///
/// The roller owns the RNG — seeded from [`RollConfig::seed`] when given,
/// OS entropy otherwise — and the most recent roll's raw and aggregated
/// results, which are replaced wholesale on every roll.
#[derive(Debug)]
pub struct Roller {
    sets: Vec<DiceSet>,
    rng: StdRng,
    raw_rolls: Vec<Vec<i32>>,
    results: Vec<SetResult>,
    rolled: bool,
}

impl Roller {
    /// Build a roller from ordered (count, type) token pairs.
    ///
    /// Every pair must be well-formed: a positive integer count and a
    /// recognized die-type token. Any bad pair fails the whole
    /// construction with no dice built and no randomness consumed.
    pub fn new(pairs: &[(&str, &str)], config: &RollConfig) -> DiceResult<Self> {
        let mut sets = Vec::with_capacity(pairs.len());
        for &(count_token, type_token) in pairs {
            let count = count_token
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&count| count >= 1)
                .ok_or_else(|| DiceError::InvalidCount(count_token.to_string()))?;
            sets.push(DiceSet::new(count, type_token, config)?);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            sets,
            rng,
            raw_rolls: Vec::new(),
            results: Vec::new(),
            rolled: false,
        })
    }

    /// The dice sets in specification order.
    pub fn sets(&self) -> &[DiceSet] {
        &self.sets
    }

    /// Roll every set, replacing the previous results wholesale.
    pub fn do_roll(&mut self) {
        let mut raw_rolls = Vec::with_capacity(self.sets.len());
        let mut results = Vec::with_capacity(self.sets.len());
        for set in &mut self.sets {
            set.roll(&mut self.rng);
            raw_rolls.push(set.spread());
            results.push(set.result());
        }
        self.raw_rolls = raw_rolls;
        self.results = results;
        self.rolled = true;
    }

    /// The current roll's per-set results, one entry per set in input
    /// order. Rolls once first if no roll has happened yet.
    pub fn results(&mut self) -> &[SetResult] {
        if !self.rolled {
            self.do_roll();
        }
        &self.results
    }

    /// The current roll's flattened faces per set (the debug view).
    pub fn raw_rolls(&self) -> &[Vec<i32>] {
        &self.raw_rolls
    }
}
