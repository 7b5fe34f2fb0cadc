//! Deck generation: paired identities in a uniformly random order.
//!
//! A board of `tile_count` tiles uses the first `tile_count / 2`
//! identities of the catalog, each placed twice. Which faces appear is
//! deterministic; only their positions are random. Ordering uses a
//! Fisher-Yates shuffle so every arrangement is equally likely.

use serde::{Deserialize, Serialize};

use super::identity::CardIdentity;
use crate::core::GameRng;

/// A tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// The face shown when the tile is flipped.
    pub identity: CardIdentity,

    /// Index of this tile in the board sequence.
    pub position: usize,

    /// Has this tile been paired?
    pub matched: bool,
}

impl DeckEntry {
    /// Create an unmatched entry.
    #[must_use]
    pub fn new(identity: CardIdentity, position: usize) -> Self {
        Self {
            identity,
            position,
            matched: false,
        }
    }

    /// Borrow a rendering view of this entry.
    #[must_use]
    pub fn view(&self) -> CardView<'_> {
        CardView {
            name: &self.identity.name,
            image: &self.identity.image,
            matched: self.matched,
        }
    }
}

/// What the presentation layer needs to draw one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardView<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub matched: bool,
}

/// Build a shuffled deck of `tile_count` entries.
///
/// Panics unless `tile_count` is even, non-zero, and at most twice the
/// number of available identities.
///
/// ```
/// use memory_pairs::cards::{generate_deck, IdentityCatalog};
/// use memory_pairs::core::GameRng;
///
/// let catalog = IdentityCatalog::standard();
/// let mut rng = GameRng::new(7);
/// let deck = generate_deck(10, catalog.identities(), &mut rng);
///
/// assert_eq!(deck.len(), 10);
/// assert!(deck.iter().enumerate().all(|(i, e)| e.position == i && !e.matched));
/// ```
#[must_use]
pub fn generate_deck(
    tile_count: usize,
    identities: &[CardIdentity],
    rng: &mut GameRng,
) -> Vec<DeckEntry> {
    assert!(tile_count > 0, "Tile count must be positive");
    assert!(tile_count % 2 == 0, "Tile count must be even, got {}", tile_count);
    assert!(
        tile_count <= identities.len() * 2,
        "Tile count {} needs {} identities, only {} available",
        tile_count,
        tile_count / 2,
        identities.len()
    );

    let selected = &identities[..tile_count / 2];
    let mut faces: Vec<&CardIdentity> = selected.iter().chain(selected.iter()).collect();
    rng.shuffle(&mut faces);

    faces
        .into_iter()
        .enumerate()
        .map(|(position, identity)| DeckEntry::new(identity.clone(), position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::IdentityCatalog;
    use rustc_hash::FxHashMap;

    fn counts(deck: &[DeckEntry]) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for entry in deck {
            *counts.entry(entry.identity.name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_each_identity_twice() {
        let catalog = IdentityCatalog::standard();
        let mut rng = GameRng::new(42);

        for tile_count in [2, 10, 20, 30] {
            let deck = generate_deck(tile_count, catalog.identities(), &mut rng);
            let counts = counts(&deck);

            assert_eq!(deck.len(), tile_count);
            assert_eq!(counts.len(), tile_count / 2);
            assert!(counts.values().all(|&c| c == 2));
        }
    }

    #[test]
    fn test_uses_catalog_prefix() {
        let catalog = IdentityCatalog::standard();
        let mut rng = GameRng::new(42);
        let deck = generate_deck(10, catalog.identities(), &mut rng);

        for entry in &deck {
            let pos = catalog.position_of(&entry.identity.name).unwrap();
            assert!(pos < 5, "{} is outside the first five identities", entry.identity);
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let catalog = IdentityCatalog::standard();
        let deck1 = generate_deck(20, catalog.identities(), &mut GameRng::new(9));
        let deck2 = generate_deck(20, catalog.identities(), &mut GameRng::new(9));

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_view() {
        let entry = DeckEntry::new(CardIdentity::new("img1", "img/img1.jpg"), 3);
        let view = entry.view();

        assert_eq!(view.name, "img1");
        assert_eq!(view.image, "img/img1.jpg");
        assert!(!view.matched);
    }

    #[test]
    #[should_panic(expected = "must be even")]
    fn test_odd_tile_count_panics() {
        let catalog = IdentityCatalog::standard();
        let _ = generate_deck(9, catalog.identities(), &mut GameRng::new(1));
    }

    #[test]
    #[should_panic(expected = "only 15 available")]
    fn test_too_many_tiles_panics() {
        let catalog = IdentityCatalog::standard();
        let _ = generate_deck(32, catalog.identities(), &mut GameRng::new(1));
    }
}
