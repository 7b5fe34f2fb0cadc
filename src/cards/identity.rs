//! Card identities - the faces a pair of tiles share.

use serde::{Deserialize, Serialize};

/// One face that appears exactly twice on a board.
///
/// Two tiles match when their identities have the same `name`. The
/// `image` is an opaque hint for the presentation layer (an asset path
/// in the standard catalog); the engine never looks at it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIdentity {
    /// Matching key.
    pub name: String,

    /// Asset hint for rendering.
    pub image: String,
}

impl CardIdentity {
    /// Create a new identity.
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Do the two identities form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &CardIdentity) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
