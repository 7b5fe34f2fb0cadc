//! # memory-pairs
//!
//! Deck generation and turn logic for a card-pairs memory game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never renders, plays sound or
//!    sleeps. It returns outcomes and queues `Notification`s.
//!
//! 2. **Timing-Agnostic**: A mismatch locks the board until the caller
//!    resolves it. Delays are configuration handed to the presenter.
//!
//! 3. **Reproducible**: Decks come from a seedable ChaCha RNG, shuffled
//!    with Fisher-Yates. Each session forks its own stream.
//!
//! ## Modules
//!
//! - `core`: Session ids, RNG, configuration, errors
//! - `cards`: Card identities, the identity catalog, deck generation
//! - `game`: The per-session state machine and the controller
//! - `celebration`: Firework bursts for the win screen

pub mod core;
pub mod cards;
pub mod game;
pub mod celebration;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    columns_for, Difficulty, GameConfig, GameError, GameResult, GameRng, SessionId,
};

pub use crate::cards::{generate_deck, CardIdentity, CardView, DeckEntry, IdentityCatalog};

pub use crate::game::{
    GamePhase, GameSession, IgnoreReason, MemoryGame, Notification, ResolveOutcome, Sound,
    TapOutcome,
};

pub use crate::celebration::{FireworkBurst, Particle};
