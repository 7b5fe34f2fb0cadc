//! Core engine types: session ids, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by the card and game
//! modules. Presenters configure the engine via `GameConfig` rather than
//! modifying the core.

pub mod config;
pub mod error;
pub mod id;
pub mod rng;

pub use config::{columns_for, Difficulty, GameConfig};
pub use error::{GameError, GameResult};
pub use id::SessionId;
pub use rng::GameRng;
