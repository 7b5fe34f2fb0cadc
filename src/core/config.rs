//! Game configuration types.
//!
//! Presenters configure the engine at startup by providing:
//! - `IdentityCatalog`: The faces decks are dealt from
//! - Presentation delays: How long a mismatch stays face up, when the
//!   win screen appears, how often firework bursts fire
//! - `GameConfig`: Combines all configuration
//!
//! Difficulties are a small fixed enumeration; `Difficulty` maps each
//! one to its tile count and board layout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::IdentityCatalog;

/// Built-in difficulty levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 10 tiles, 5 pairs.
    #[default]
    Easy,
    /// 20 tiles, 10 pairs.
    Medium,
    /// 30 tiles, 15 pairs.
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order.
    #[must_use]
    pub const fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Total number of tiles on the board.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// Number of grid columns for this difficulty.
    #[must_use]
    pub const fn columns(self) -> usize {
        columns_for(self.tile_count())
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Difficulty with exactly this tile count, if any.
    #[must_use]
    pub fn from_tile_count(tile_count: usize) -> Option<Self> {
        Self::all().into_iter().find(|d| d.tile_count() == tile_count)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} tiles)", self.name(), self.tile_count())
    }
}

/// Grid columns for an arbitrary tile count.
///
/// 10 and 20 tile boards are five wide; everything else is six wide.
#[must_use]
pub const fn columns_for(tile_count: usize) -> usize {
    match tile_count {
        10 | 20 => 5,
        _ => 6,
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use memory_pairs::core::GameConfig;
/// use std::time::Duration;
///
/// let config = GameConfig::default()
///     .with_seed(7)
///     .with_mismatch_delay_ms(800);
///
/// assert_eq!(config.mismatch_delay(), Duration::from_millis(800));
/// assert_eq!(config.win_delay(), Duration::from_millis(1000));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Faces available to the deck generator.
    pub catalog: IdentityCatalog,

    /// How long a mismatched pair stays face up before the caller resolves it.
    pub mismatch_delay_ms: u64,

    /// Pause between the final match and the win screen.
    pub win_delay_ms: u64,

    /// Interval between firework bursts on the win screen.
    pub burst_interval_ms: u64,

    /// Particles per firework burst.
    pub particles_per_burst: usize,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: IdentityCatalog::standard(),
            mismatch_delay_ms: 1500,
            win_delay_ms: 1000,
            burst_interval_ms: 800,
            particles_per_burst: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Use a custom identity catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: IdentityCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Fix the RNG seed for reproducible decks.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn with_win_delay_ms(mut self, ms: u64) -> Self {
        self.win_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn with_burst_interval_ms(mut self, ms: u64) -> Self {
        self.burst_interval_ms = ms;
        self
    }

    #[must_use]
    pub fn with_particles_per_burst(mut self, count: usize) -> Self {
        self.particles_per_burst = count;
        self
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }

    #[must_use]
    pub fn burst_interval(&self) -> Duration {
        Duration::from_millis(self.burst_interval_ms)
    }
}
