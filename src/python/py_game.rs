//! Controller bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, GameError};
use crate::game::{GamePhase, MemoryGame, ResolveOutcome, TapOutcome};

fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for the game controller.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    game: MemoryGame,
}

#[pymethods]
impl PyMemoryGame {
    /// Create an idle controller.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible decks (None = entropy)
    /// - mismatch_delay_ms: How long a mismatch stays visible
    #[new]
    #[pyo3(signature = (seed = None, mismatch_delay_ms = 1500))]
    fn new(seed: Option<u64>, mismatch_delay_ms: u64) -> Self {
        let mut config = GameConfig::default().with_mismatch_delay_ms(mismatch_delay_ms);
        config.seed = seed;
        Self {
            game: MemoryGame::new(config),
        }
    }

    /// Deal a new board. Returns the identity names in board order.
    fn select_difficulty(&mut self, tile_count: usize) -> PyResult<Vec<String>> {
        let deck = self.game.select_difficulty(tile_count).map_err(to_py_err)?;
        Ok(deck.iter().map(|e| e.identity.name.clone()).collect())
    }

    /// Tap a tile.
    ///
    /// Returns `(kind, indices, moves)` where kind is one of "ignored",
    /// "first_flip", "match", "mismatch", "won".
    fn card_tapped(&mut self, index: usize) -> PyResult<(&'static str, Vec<usize>, u32)> {
        let outcome = self.game.card_tapped(index).map_err(to_py_err)?;
        let moves = self.game.current_moves();
        let result = match outcome {
            TapOutcome::Ignored(_) => ("ignored", vec![]),
            TapOutcome::FirstFlipAccepted { index } => ("first_flip", vec![index]),
            TapOutcome::MatchFound { first, second } => ("match", vec![first, second]),
            TapOutcome::MismatchDetected { first, second } => ("mismatch", vec![first, second]),
            TapOutcome::GameWon { first, second, .. } => ("won", vec![first, second]),
        };
        Ok((result.0, result.1, moves))
    }

    /// Hide the pending mismatch.
    fn resolve_mismatch(&mut self) -> PyResult<()> {
        self.game.resolve_mismatch().map_err(to_py_err)?;
        Ok(())
    }

    /// Resolve a mismatch for a specific session. Returns False if stale.
    fn resolve_mismatch_for(&mut self, session: u64) -> PyResult<bool> {
        let outcome = self
            .game
            .resolve_mismatch_for(crate::core::SessionId::new(session))
            .map_err(to_py_err)?;
        Ok(outcome == ResolveOutcome::Ready)
    }

    /// Win screen timer callback. Returns False if stale.
    fn show_win_screen_for(&mut self, session: u64) -> bool {
        self.game.show_win_screen_for(crate::core::SessionId::new(session)) == ResolveOutcome::Ready
    }

    /// Redeal at the current tile count.
    fn reset(&mut self) -> PyResult<Vec<String>> {
        let deck = self.game.reset_current_difficulty().map_err(to_py_err)?;
        Ok(deck.iter().map(|e| e.identity.name.clone()).collect())
    }

    fn return_to_selection(&mut self) {
        self.game.return_to_selection();
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.game.current_moves()
    }

    #[getter]
    fn matched_pairs(&self) -> usize {
        self.game.matched_pairs()
    }

    #[getter]
    fn session(&self) -> Option<u64> {
        self.game.session_id().map(|id| id.raw())
    }

    fn is_won(&self) -> bool {
        self.game.is_won()
    }

    fn is_idle(&self) -> bool {
        self.game.phase() == GamePhase::Idle
    }

    /// Identity names in board order.
    fn deck_names(&self) -> Vec<String> {
        self.game
            .deck_snapshot()
            .iter()
            .map(|v| v.name.to_string())
            .collect()
    }

    /// 1 for matched tiles, 0 otherwise, as a numpy array.
    fn matched_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let mask = self
            .game
            .deck_snapshot()
            .iter()
            .map(|v| u8::from(v.matched))
            .collect();
        PyArray1::from_vec_bound(py, mask)
    }

    fn __repr__(&self) -> String {
        match self.game.session_id() {
            Some(id) => format!(
                "MemoryGame(session={}, moves={}, pairs={}, phase={:?})",
                id.raw(),
                self.game.current_moves(),
                self.game.matched_pairs(),
                self.game.phase()
            ),
            None => "MemoryGame(idle)".to_string(),
        }
    }
}
