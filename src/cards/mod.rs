//! Card system: identities, the catalog, and deck generation.
//!
//! ## Key Types
//!
//! - `CardIdentity`: A face shared by exactly two tiles
//! - `IdentityCatalog`: Ordered pool of faces a deck is dealt from
//! - `DeckEntry`: One tile on the board (identity, position, matched)
//! - `generate_deck`: Paired, uniformly shuffled deck for a tile count

pub mod catalog;
pub mod deck;
pub mod identity;

pub use catalog::{IdentityCatalog, STANDARD_IDENTITY_COUNT};
pub use deck::{generate_deck, CardView, DeckEntry};
pub use identity::CardIdentity;
