//! Identity catalog - the pool of faces a deck is drawn from.
//!
//! The `IdentityCatalog` stores the available identities in a fixed
//! order. Deck generation always takes a prefix of that order, so the
//! catalog order decides which faces appear at each difficulty.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::identity::CardIdentity;

/// Number of faces in the standard catalog.
pub const STANDARD_IDENTITY_COUNT: usize = 15;

/// Ordered registry of card identities.
///
/// ## Example
///
/// ```
/// use memory_pairs::cards::{CardIdentity, IdentityCatalog};
///
/// let mut catalog = IdentityCatalog::new("img/back.jpg");
/// catalog.register(CardIdentity::new("cat", "img/cat.jpg"));
/// catalog.register(CardIdentity::new("dog", "img/dog.jpg"));
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.max_tile_count(), 4);
/// assert_eq!(catalog.get("dog").unwrap().image, "img/dog.jpg");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "CatalogData", into = "CatalogData")]
pub struct IdentityCatalog {
    identities: Vec<CardIdentity>,
    by_name: FxHashMap<String, usize>,
    card_back: String,
}

/// Serialized form: the name index is rebuilt on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CatalogData {
    identities: Vec<CardIdentity>,
    card_back: String,
}

impl From<CatalogData> for IdentityCatalog {
    fn from(data: CatalogData) -> Self {
        let mut catalog = IdentityCatalog::new(data.card_back);
        for identity in data.identities {
            if !catalog.contains(&identity.name) {
                catalog.register(identity);
            }
        }
        catalog
    }
}

impl From<IdentityCatalog> for CatalogData {
    fn from(catalog: IdentityCatalog) -> Self {
        Self {
            identities: catalog.identities,
            card_back: catalog.card_back,
        }
    }
}

impl IdentityCatalog {
    /// Create an empty catalog with the given card-back asset.
    #[must_use]
    pub fn new(card_back: impl Into<String>) -> Self {
        Self {
            identities: Vec::new(),
            by_name: FxHashMap::default(),
            card_back: card_back.into(),
        }
    }

    /// The fifteen faces shipped with the game: `img1`..`img15`.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new("img/img16.jpg");
        for n in 1..=STANDARD_IDENTITY_COUNT {
            catalog.register(CardIdentity::new(format!("img{n}"), format!("img/img{n}.jpg")));
        }
        catalog
    }

    /// Register an identity at the end of the catalog.
    ///
    /// Panics if an identity with the same name already exists.
    pub fn register(&mut self, identity: CardIdentity) {
        if self.by_name.contains_key(&identity.name) {
            panic!("Identity {:?} already registered", identity.name);
        }
        self.by_name.insert(identity.name.clone(), self.identities.len());
        self.identities.push(identity);
    }

    /// Look up an identity by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardIdentity> {
        self.by_name.get(name).map(|&i| &self.identities[i])
    }

    /// Position of an identity in catalog order.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All identities in catalog order.
    #[must_use]
    pub fn identities(&self) -> &[CardIdentity] {
        &self.identities
    }

    /// Asset shown on the back of every tile.
    #[must_use]
    pub fn card_back(&self) -> &str {
        &self.card_back
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Largest board this catalog can fill.
    #[must_use]
    pub fn max_tile_count(&self) -> usize {
        self.identities.len() * 2
    }

    /// Can a board of `tile_count` tiles be dealt from this catalog?
    #[must_use]
    pub fn supports(&self, tile_count: usize) -> bool {
        tile_count > 0 && tile_count % 2 == 0 && tile_count <= self.max_tile_count()
    }
}

impl Default for IdentityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = IdentityCatalog::standard();

        assert_eq!(catalog.len(), STANDARD_IDENTITY_COUNT);
        assert_eq!(catalog.max_tile_count(), 30);
        assert_eq!(catalog.card_back(), "img/img16.jpg");
        assert_eq!(catalog.identities()[0].name, "img1");
        assert_eq!(catalog.identities()[14].image, "img/img15.jpg");
        assert_eq!(catalog.position_of("img5"), Some(4));
    }

    #[test]
    fn test_supports() {
        let catalog = IdentityCatalog::standard();

        assert!(catalog.supports(10));
        assert!(catalog.supports(30));
        assert!(!catalog.supports(0));
        assert!(!catalog.supports(11));
        assert!(!catalog.supports(32));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut catalog = IdentityCatalog::new("back");
        catalog.register(CardIdentity::new("a", "a.png"));
        catalog.register(CardIdentity::new("a", "b.png"));
    }

    #[test]
    fn test_serde_rebuilds_index() {
        let catalog = IdentityCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored: IdentityCatalog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), catalog.len());
        assert_eq!(restored.get("img7"), catalog.get("img7"));
        assert_eq!(restored.card_back(), "img/img16.jpg");
    }
}
