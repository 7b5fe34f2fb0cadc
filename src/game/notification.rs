//! Presentation intents queued by the controller.
//!
//! The engine never touches a renderer, a speaker or a clock. Instead it
//! queues `Notification`s describing what the presentation layer should
//! do; the presenter drains and applies them after each call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::SessionId;

/// Sound effects the presenter may play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// A tile turned over, or a menu button was pressed.
    Flip,
    /// A pair was found.
    Match,
    /// The win screen came up.
    Win,
}

/// One presentation intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Draw a fresh face-down board for this session.
    RenderBoard {
        session: SessionId,
        tile_count: usize,
        columns: usize,
    },

    /// Leave the board and show the difficulty menu.
    ShowSelection,

    /// Update the move counter.
    MovesChanged(u32),

    /// Turn a tile face up.
    RevealCard(usize),

    /// Turn a mismatched pair face down again.
    HideCards(usize, usize),

    /// A pair was found; it stays face up and stops taking taps.
    LockMatched(usize, usize),

    PlaySound(Sound),

    /// Call `resolve_mismatch_for(session)` once `delay` has passed.
    ScheduleMismatchResolve { session: SessionId, delay: Duration },

    /// Call `show_win_screen_for(session)` once `delay` has passed, then
    /// fire a burst every `burst_interval` while the screen is up.
    ScheduleWinScreen {
        session: SessionId,
        delay: Duration,
        moves: u32,
        burst_interval: Duration,
    },

    /// Hide the win screen, stop its sound and any firework loop.
    StopCelebration,
}

impl Notification {
    /// Session the notification is tied to, if it names one.
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        match *self {
            Notification::RenderBoard { session, .. }
            | Notification::ScheduleMismatchResolve { session, .. }
            | Notification::ScheduleWinScreen { session, .. } => Some(session),
            _ => None,
        }
    }
}
