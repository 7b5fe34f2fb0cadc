//! Python bindings for the memory-pairs engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_pairs as mp
//!
//! game = mp.MemoryGame(seed=42)
//! names = game.select_difficulty(10)
//!
//! kind, indices, moves = game.card_tapped(0)
//! kind, indices, moves = game.card_tapped(1)
//! if kind == "mismatch":
//!     game.resolve_mismatch()
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// memory_pairs: deck generation and turn logic for a card-pairs game.
#[pymodule]
fn memory_pairs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
