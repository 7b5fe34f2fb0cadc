//! Caller-misuse errors.
//!
//! Gameplay rejections (tapping a locked board, a matched card, or the
//! card that is already face up) are *not* errors; they come back as
//! `TapOutcome::Ignored`. A `GameError` means the caller broke the
//! contract and must fix its usage.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;

/// Contract violations reported by the deck generator and state machine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("no game session is active")]
    NoSession,

    #[error("tile index {index} is out of range for a board of {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot resolve a mismatch while the board is not locked")]
    NotLocked,

    #[error("tile count {tile_count} must be even and between 2 and {max}")]
    InvalidTileCount { tile_count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::IndexOutOfRange { index: 12, len: 10 };
        assert_eq!(err.to_string(), "tile index 12 is out of range for a board of 10 tiles");

        let err = GameError::InvalidTileCount { tile_count: 7, max: 30 };
        assert_eq!(err.to_string(), "tile count 7 must be even and between 2 and 30");
    }
}
