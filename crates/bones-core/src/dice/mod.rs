//! Die kinds, token parsing, and result modes.
//!
//! A die is one of a small closed set of variants: plain numeric dice with
//! any positive number of sides, ten-sided New World of Darkness dice, and
//! three-valued Fudge/Fate dice. The source's subclass hierarchy is a
//! tagged enum here, with behavior dispatched by `match`.

pub mod die;
pub mod set;

pub use die::Die;
pub use set::{DiceSet, SetResult};

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A die variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieKind {
    /// A numeric die with the given number of sides.
    Plain(u32),
    /// A ten-sided New World of Darkness die (success 8, explode 10).
    Nwod,
    /// A Fudge/Fate die with faces -1, 0, and +1.
    Fudge,
}

impl DieKind {
    /// Parse a die-type token: a positive side count, `nwod`, `fudge`, or
    /// `fate` (case-insensitive).
    pub fn from_token(token: &str) -> DiceResult<Self> {
        let tag = token.trim().to_lowercase();
        match tag.as_str() {
            "nwod" => Ok(Self::Nwod),
            "fudge" | "fate" => Ok(Self::Fudge),
            other => match other.parse::<i64>() {
                Ok(sides) if sides >= 1 && sides <= i64::from(i32::MAX) => {
                    Ok(Self::Plain(sides as u32))
                }
                Ok(sides) => Err(DiceError::InvalidSides(sides)),
                Err(_) => Err(DiceError::UnknownDieType(token.to_string())),
            },
        }
    }

    /// Returns the number of faces on this kind of die.
    pub fn sides(self) -> u32 {
        match self {
            Self::Plain(n) => n,
            Self::Nwod => 10,
            Self::Fudge => 3,
        }
    }

    /// The result mode used when no global override is given.
    pub fn default_mode(self) -> ResultMode {
        match self {
            Self::Plain(_) => ResultMode::Spread,
            Self::Nwod | Self::Fudge => ResultMode::Tally,
        }
    }

    /// The face value at or above which a die of this kind explodes.
    pub fn default_explode(self) -> Option<i32> {
        match self {
            Self::Nwod => Some(10),
            Self::Plain(_) | Self::Fudge => None,
        }
    }

    /// The face value at or above which a die of this kind counts a success.
    pub fn default_success(self) -> Option<i32> {
        match self {
            Self::Nwod => Some(8),
            Self::Plain(_) | Self::Fudge => None,
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(n) => write!(f, "d{n}"),
            Self::Nwod => write!(f, "nwod"),
            Self::Fudge => write!(f, "fudge"),
        }
    }
}

/// How a set of dice reports its combined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultMode {
    /// Every individual face value, exploded children included.
    Spread,
    /// One aggregated number: a sum, or a success count when a success
    /// threshold is in play.
    Tally,
}

impl std::fmt::Display for ResultMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spread => write!(f, "spread"),
            Self::Tally => write!(f, "tally"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords() {
        assert_eq!(DieKind::from_token("nwod"), Ok(DieKind::Nwod));
        assert_eq!(DieKind::from_token("NWoD"), Ok(DieKind::Nwod));
        assert_eq!(DieKind::from_token("fudge"), Ok(DieKind::Fudge));
        assert_eq!(DieKind::from_token("fate"), Ok(DieKind::Fudge));
    }

    #[test]
    fn parse_numeric() {
        assert_eq!(DieKind::from_token("6"), Ok(DieKind::Plain(6)));
        assert_eq!(DieKind::from_token("100"), Ok(DieKind::Plain(100)));
        assert_eq!(DieKind::from_token(" 20 "), Ok(DieKind::Plain(20)));
    }

    #[test]
    fn parse_unknown_token() {
        assert_eq!(
            DieKind::from_token("xyz"),
            Err(DiceError::UnknownDieType("xyz".to_string()))
        );
        assert_eq!(
            DieKind::from_token(""),
            Err(DiceError::UnknownDieType(String::new()))
        );
    }

    #[test]
    fn parse_non_positive_sides() {
        assert_eq!(DieKind::from_token("0"), Err(DiceError::InvalidSides(0)));
        assert_eq!(DieKind::from_token("-4"), Err(DiceError::InvalidSides(-4)));
    }

    #[test]
    fn sides_per_kind() {
        assert_eq!(DieKind::Plain(6).sides(), 6);
        assert_eq!(DieKind::Nwod.sides(), 10);
        assert_eq!(DieKind::Fudge.sides(), 3);
    }

    #[test]
    fn default_modes() {
        assert_eq!(DieKind::Plain(6).default_mode(), ResultMode::Spread);
        assert_eq!(DieKind::Nwod.default_mode(), ResultMode::Tally);
        assert_eq!(DieKind::Fudge.default_mode(), ResultMode::Tally);
    }

    #[test]
    fn nwod_thresholds() {
        assert_eq!(DieKind::Nwod.default_explode(), Some(10));
        assert_eq!(DieKind::Nwod.default_success(), Some(8));
        assert_eq!(DieKind::Plain(6).default_explode(), None);
        assert_eq!(DieKind::Fudge.default_success(), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(DieKind::Plain(20).to_string(), "d20");
        assert_eq!(DieKind::Nwod.to_string(), "nwod");
        assert_eq!(DieKind::Fudge.to_string(), "fudge");
    }

    #[test]
    fn mode_display() {
        assert_eq!(ResultMode::Spread.to_string(), "spread");
        assert_eq!(ResultMode::Tally.to_string(), "tally");
    }
}
