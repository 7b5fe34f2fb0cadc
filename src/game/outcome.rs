//! Transition outcomes returned to the caller.

use serde::{Deserialize, Serialize};

/// Where a session is in its flip cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session exists (controller only).
    Idle,
    /// Waiting for the first card of a pair.
    AwaitingFirstFlip,
    /// One card is face up, waiting for its partner.
    AwaitingSecondFlip,
    /// A mismatched pair is face up and the board is locked.
    Resolving,
    /// Every pair has been found.
    Won,
}

/// Why a tap was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A mismatch is still being shown.
    Locked,
    /// The tile is already the face-up first selection.
    AlreadySelected,
    /// The tile belongs to a found pair.
    AlreadyMatched,
}

/// Result of a `card_tapped` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapOutcome {
    /// Benign rejection; nothing changed.
    Ignored(IgnoreReason),

    /// The tile is now the first selection. Moves unchanged.
    FirstFlipAccepted { index: usize },

    /// The two tiles form a pair and are now matched.
    ///
    /// Never produced for the final pair: that tap yields `GameWon`
    /// instead, so callers locking matched tiles must handle both.
    MatchFound { first: usize, second: usize },

    /// The two tiles differ; the board is locked until `resolve_mismatch`.
    MismatchDetected { first: usize, second: usize },

    /// The final pair was found. Carries the match indices and the total
    /// move count. Produced exactly once per session.
    GameWon { first: usize, second: usize, moves: u32 },
}

impl TapOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, TapOutcome::Ignored(_))
    }

    /// Did this tap complete a pair (including the winning one)?
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, TapOutcome::MatchFound { .. } | TapOutcome::GameWon { .. })
    }

    /// Indices of the pair this tap completed, matched or not.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match *self {
            TapOutcome::MatchFound { first, second }
            | TapOutcome::MismatchDetected { first, second }
            | TapOutcome::GameWon { first, second, .. } => Some((first, second)),
            _ => None,
        }
    }
}

/// Result of a `resolve_mismatch` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolveOutcome {
    /// The mismatch was cleared; the next tap is a first flip.
    Ready,
    /// The resolution belonged to a superseded session and was dropped.
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_helpers() {
        let ignored = TapOutcome::Ignored(IgnoreReason::Locked);
        assert!(ignored.is_ignored());
        assert_eq!(ignored.pair(), None);

        let won = TapOutcome::GameWon { first: 1, second: 4, moves: 5 };
        assert!(won.is_match());
        assert_eq!(won.pair(), Some((1, 4)));

        let miss = TapOutcome::MismatchDetected { first: 0, second: 2 };
        assert!(!miss.is_match());
        assert_eq!(miss.pair(), Some((0, 2)));

        assert_eq!(TapOutcome::FirstFlipAccepted { index: 3 }.pair(), None);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = TapOutcome::MatchFound { first: 2, second: 7 };
        let json = serde_json::to_string(&outcome).unwrap();
        let restored: TapOutcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, restored);
    }
}
