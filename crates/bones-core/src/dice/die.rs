//! A single rollable die and its exploded children.
//!
//! A die is a tree node: rolling it draws a face, and a face at or above
//! the explode threshold spawns exactly one child of the same
//! configuration, rolled recursively. Chains are bounded only by
//! probability, so callers must treat arbitrarily deep trees as normal.
//! Every instance owns its `face` and `children` storage outright.

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::RollConfig;
use crate::error::{DiceError, DiceResult};

use super::DieKind;

/// One rollable die of a given kind, plus any dice it exploded into.
#[derive(Debug, Clone)]
pub struct Die {
    kind: DieKind,
    explode: Option<i32>,
    success: Option<i32>,
    rote: bool,
    botch: bool,
    face: Option<i32>,
    children: Vec<Die>,
}

impl Die {
    /// Build a die of the given kind with global overrides applied.
    ///
    /// Fudge dice ignore explode and success overrides; rote and botch
    /// only stick to NWoD dice. Fails on fewer than one side or an
    /// explode threshold below 2 (which would re-roll forever).
    pub fn new(kind: DieKind, config: &RollConfig) -> DiceResult<Self> {
        let sides = kind.sides();
        if sides < 1 || sides > i32::MAX as u32 {
            return Err(DiceError::InvalidSides(i64::from(sides)));
        }

        let explode = match kind {
            DieKind::Fudge => None,
            DieKind::Plain(_) | DieKind::Nwod => config.explode.or(kind.default_explode()),
        };
        if let Some(threshold) = explode
            && threshold < 2
        {
            return Err(DiceError::InvalidExplodeThreshold(threshold));
        }

        let success = match kind {
            DieKind::Fudge => None,
            DieKind::Plain(_) | DieKind::Nwod => config.success.or(kind.default_success()),
        };

        let is_nwod = kind == DieKind::Nwod;
        Ok(Self {
            kind,
            explode,
            success,
            rote: config.rote && is_nwod,
            botch: config.botch && is_nwod,
            face: None,
            children: Vec::new(),
        })
    }

    /// The kind of this die.
    pub fn kind(&self) -> DieKind {
        self.kind
    }

    /// The most recent face, or `None` if the die has never been rolled.
    pub fn face(&self) -> Option<i32> {
        self.face
    }

    /// Dice spawned by this die's explosions during the last roll.
    pub fn children(&self) -> &[Die] {
        &self.children
    }

    /// The effective explode threshold, if this die can explode.
    pub fn explode_threshold(&self) -> Option<i32> {
        self.explode
    }

    /// The effective success threshold, if tallies count successes.
    pub fn success_threshold(&self) -> Option<i32> {
        self.success
    }

    /// Roll this die, replacing the previous face and rebuilding the
    /// explosion chain from scratch.
    ///
    /// With rote enabled, an initial face below the success threshold is
    /// redrawn once (a replacement, not an extra die) before the explode
    /// check. Rote never carries over to exploded children.
    pub fn roll(&mut self, rng: &mut StdRng) {
        self.children.clear();

        let mut face = self.draw(rng);
        if self.rote
            && let Some(threshold) = self.success
            && face < threshold
        {
            face = self.draw(rng);
        }
        self.face = Some(face);

        if let Some(threshold) = self.explode
            && face >= threshold
        {
            let mut child = self.spawn_child();
            child.roll(rng);
            self.children.push(child);
        }
    }

    fn draw(&self, rng: &mut StdRng) -> i32 {
        match self.kind {
            DieKind::Fudge => rng.random_range(-1..=1),
            kind => rng.random_range(1..=kind.sides() as i32),
        }
    }

    fn spawn_child(&self) -> Die {
        Die {
            kind: self.kind,
            explode: self.explode,
            success: self.success,
            rote: false,
            botch: self.botch,
            face: None,
            children: Vec::new(),
        }
    }

    /// All faces produced by this die: its own, then each child's spread,
    /// depth-first. Empty if the die has never been rolled.
    pub fn spread(&self) -> Vec<i32> {
        let mut faces = Vec::new();
        if let Some(face) = self.face {
            faces.push(face);
            for child in &self.children {
                faces.extend(child.spread());
            }
        }
        faces
    }

    /// This die's tally contribution, children included.
    ///
    /// Without a success threshold the face value itself is summed (Fudge
    /// faces are already signed). With one, the die counts 1 when its face
    /// meets the threshold. A botch-enabled die showing 1 is exactly -1,
    /// children ignored.
    pub fn tally(&self) -> i32 {
        let Some(face) = self.face else {
            return 0;
        };

        if self.botch && face == 1 {
            return -1;
        }

        let own = match self.success {
            Some(threshold) => i32::from(face >= threshold),
            None => face,
        };
        own + self.children.iter().map(Die::tally).sum::<i32>()
    }
}
