//! The game controller: the single owner of the active session.
//!
//! `MemoryGame` is what a presentation layer talks to. It deals decks,
//! forwards taps to the current `GameSession`, tags every session with a
//! `SessionId`, and queues `Notification`s for the presenter.
//!
//! ## Example
//!
//! ```
//! use memory_pairs::game::{MemoryGame, TapOutcome, ResolveOutcome};
//! use memory_pairs::core::GameConfig;
//!
//! let mut game = MemoryGame::new(GameConfig::default().with_seed(42));
//! game.select_difficulty(10).unwrap();
//!
//! let first = 0;
//! let partner = game.session().unwrap().partner_of(first).unwrap();
//!
//! assert!(matches!(game.card_tapped(first), Ok(TapOutcome::FirstFlipAccepted { .. })));
//! assert!(game.card_tapped(partner).unwrap().is_match());
//! assert_eq!(game.current_moves(), 1);
//! ```

use smallvec::SmallVec;
use tracing::{info, warn};

use super::notification::{Notification, Sound};
use super::outcome::{GamePhase, ResolveOutcome, TapOutcome};
use super::session::GameSession;
use crate::cards::{CardView, DeckEntry};
use crate::celebration::FireworkBurst;
use crate::core::{columns_for, Difficulty, GameConfig, GameError, GameResult, GameRng, SessionId};

/// Notifications queued between drains. Most calls produce at most four.
pub type NotificationQueue = SmallVec<[Notification; 4]>;

/// Controller owning at most one game session.
#[derive(Debug)]
pub struct MemoryGame {
    config: GameConfig,
    rng: GameRng,
    session: Option<GameSession>,
    next_session: SessionId,
    notifications: NotificationQueue,
}

impl MemoryGame {
    /// Create an idle controller.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Self {
            config,
            rng,
            session: None,
            next_session: SessionId::FIRST,
            notifications: NotificationQueue::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Lifecycle ===

    /// Deal a new board of `tile_count` tiles, replacing any current session.
    ///
    /// Returns the deck in board order for rendering.
    pub fn select_difficulty(&mut self, tile_count: usize) -> GameResult<&[DeckEntry]> {
        if !self.config.catalog.supports(tile_count) {
            return Err(self.misuse(GameError::InvalidTileCount {
                tile_count,
                max: self.config.catalog.max_tile_count(),
            }));
        }

        self.notifications.push(Notification::PlaySound(Sound::Flip));
        self.start_session(tile_count);
        Ok(self.deck())
    }

    /// Deal a board for one of the built-in difficulties.
    pub fn select(&mut self, difficulty: Difficulty) -> GameResult<&[DeckEntry]> {
        self.select_difficulty(difficulty.tile_count())
    }

    /// Redeal at the current tile count. Any pending mismatch timer for
    /// the old session becomes stale.
    pub fn reset_current_difficulty(&mut self) -> GameResult<&[DeckEntry]> {
        let tile_count = match &self.session {
            Some(session) => session.tile_count(),
            None => return Err(self.misuse(GameError::NoSession)),
        };

        self.notifications.push(Notification::PlaySound(Sound::Flip));
        self.start_session(tile_count);
        Ok(self.deck())
    }

    /// Drop the current session and go back to the difficulty menu.
    pub fn return_to_selection(&mut self) {
        if let Some(session) = self.session.take() {
            info!(session = %session.id(), "returned to selection");
        }
        self.notifications.push(Notification::PlaySound(Sound::Flip));
        self.notifications.push(Notification::StopCelebration);
        self.notifications.push(Notification::ShowSelection);
    }

    fn start_session(&mut self, tile_count: usize) {
        let id = self.next_session;
        self.next_session = id.next();

        let mut session_rng = self.rng.fork();
        let session = GameSession::deal(id, tile_count, &self.config.catalog, &mut session_rng);
        info!(session = %id, tile_count, "session started");

        self.notifications.push(Notification::StopCelebration);
        self.notifications.push(Notification::RenderBoard {
            session: id,
            tile_count,
            columns: columns_for(tile_count),
        });
        self.notifications.push(Notification::MovesChanged(0));
        self.session = Some(session);
    }

    // === Events ===

    /// Forward a tap on tile `index` to the active session.
    pub fn card_tapped(&mut self, index: usize) -> GameResult<TapOutcome> {
        let result = match self.session.as_mut() {
            Some(session) => session.card_tapped(index),
            None => Err(GameError::NoSession),
        };
        let outcome = result.map_err(|err| self.misuse(err))?;

        let Some(session) = self.session.as_ref() else {
            return Ok(outcome);
        };
        let (id, moves) = (session.id(), session.moves());

        match outcome {
            TapOutcome::Ignored(_) => {}
            TapOutcome::FirstFlipAccepted { index } => {
                self.notifications.push(Notification::PlaySound(Sound::Flip));
                self.notifications.push(Notification::RevealCard(index));
            }
            TapOutcome::MatchFound { first, second } => {
                self.push_second_flip(second, moves);
                self.notifications.push(Notification::PlaySound(Sound::Match));
                self.notifications.push(Notification::LockMatched(first, second));
            }
            TapOutcome::MismatchDetected { second, .. } => {
                self.push_second_flip(second, moves);
                self.notifications.push(Notification::ScheduleMismatchResolve {
                    session: id,
                    delay: self.config.mismatch_delay(),
                });
            }
            TapOutcome::GameWon { first, second, moves } => {
                self.push_second_flip(second, moves);
                self.notifications.push(Notification::PlaySound(Sound::Match));
                self.notifications.push(Notification::LockMatched(first, second));
                self.notifications.push(Notification::ScheduleWinScreen {
                    session: id,
                    delay: self.config.win_delay(),
                    moves,
                    burst_interval: self.config.burst_interval(),
                });
                info!(session = %id, moves, "game won");
            }
        }

        Ok(outcome)
    }

    fn push_second_flip(&mut self, index: usize, moves: u32) {
        self.notifications.push(Notification::PlaySound(Sound::Flip));
        self.notifications.push(Notification::RevealCard(index));
        self.notifications.push(Notification::MovesChanged(moves));
    }

    /// Hide the pending mismatch of the active session.
    pub fn resolve_mismatch(&mut self) -> GameResult<ResolveOutcome> {
        let result = match self.session.as_mut() {
            Some(session) => {
                let pair = session.mismatched_pair();
                session.resolve_mismatch().map(|outcome| (outcome, pair))
            }
            None => Err(GameError::NoSession),
        };
        let (outcome, pair) = result.map_err(|err| self.misuse(err))?;

        if let Some((first, second)) = pair {
            self.notifications.push(Notification::HideCards(first, second));
        }
        Ok(outcome)
    }

    /// Timer callback for a mismatch shown in `session`.
    ///
    /// A callback for a session that has since been replaced or dropped is
    /// stale: it is ignored and reported as `Stale`.
    pub fn resolve_mismatch_for(&mut self, session: SessionId) -> GameResult<ResolveOutcome> {
        if self.session_id() != Some(session) {
            info!(stale = %session, current = ?self.session_id(), "dropping stale mismatch timer");
            return Ok(ResolveOutcome::Stale);
        }
        self.resolve_mismatch()
    }

    /// Timer callback for the win screen scheduled by `session`.
    ///
    /// Queues the win sound when `session` is still current and won;
    /// otherwise the callback is stale and nothing is queued.
    pub fn show_win_screen_for(&mut self, session: SessionId) -> ResolveOutcome {
        if self.session_id() != Some(session) || !self.is_won() {
            info!(stale = %session, current = ?self.session_id(), "dropping stale win screen timer");
            return ResolveOutcome::Stale;
        }
        self.notifications.push(Notification::PlaySound(Sound::Win));
        ResolveOutcome::Ready
    }

    fn misuse(&self, err: GameError) -> GameError {
        warn!(session = ?self.session_id(), error = %err, "invalid operation");
        err
    }

    // === Presentation ===

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> NotificationQueue {
        std::mem::take(&mut self.notifications)
    }

    /// Particles for the next firework frame. `None` unless the current
    /// session has been won.
    pub fn firework_burst(&mut self) -> Option<FireworkBurst> {
        if !self.is_won() {
            return None;
        }
        Some(FireworkBurst::generate(&mut self.rng, self.config.particles_per_burst))
    }

    // === Queries ===

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(GameSession::id)
    }

    #[must_use]
    pub fn tile_count(&self) -> Option<usize> {
        self.session.as_ref().map(GameSession::tile_count)
    }

    /// Moves in the current session; zero when idle.
    #[must_use]
    pub fn current_moves(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::moves)
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.session.as_ref().map_or(0, GameSession::matched_pairs)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_won)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.session.as_ref().map_or(GamePhase::Idle, GameSession::phase)
    }

    /// Board in order; empty when idle.
    #[must_use]
    pub fn deck(&self) -> &[DeckEntry] {
        match &self.session {
            Some(session) => session.deck(),
            None => &[],
        }
    }

    /// `{identity, matched}` views of every tile; empty when idle.
    #[must_use]
    pub fn deck_snapshot(&self) -> Vec<CardView<'_>> {
        self.session.as_ref().map(GameSession::snapshot).unwrap_or_default()
    }
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
