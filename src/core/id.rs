//! Session identification.
//!
//! Every game session gets a `SessionId` when it is dealt. Ids are
//! allocated in increasing order by the controller, so a timer that
//! captured an older id can be recognised as stale after a reset.

use serde::{Deserialize, Serialize};

/// Generation tag for one play-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Id of the first session a controller deals.
    pub const FIRST: SessionId = SessionId(1);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}
