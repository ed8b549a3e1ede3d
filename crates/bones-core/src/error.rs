//! Error types for the dice engine.
//!
//! Every variant is a configuration error surfaced at construction time,
//! before any randomness is consumed. Rolling itself cannot fail.

/// Errors that can occur while building dice, sets, or rollers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die-type token is neither a recognized keyword nor a side count.
    #[error("unknown die type '{0}'")]
    UnknownDieType(String),

    /// A die count is not a positive integer.
    #[error("invalid die count '{0}'")]
    InvalidCount(String),

    /// A plain die was given fewer than one side.
    #[error("a die needs at least 1 side, got {0}")]
    InvalidSides(i64),

    /// An explode threshold at or below 1 would re-roll forever.
    #[error("explode threshold must be at least 2, got {0}")]
    InvalidExplodeThreshold(i32),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
